//! Supported networks and chain-id lookup.

/// Networks the client can switch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chain {
    Ethereum,
    EthereumGoerli,
    EthereumSepolia,
    Optimism,
    Bnb,
    Polygon,
    Base,
    Arbitrum,
    Celo,
    Avalanche,
}

impl Chain {
    /// Networks listed in the chain selector, in display order.
    pub const SUPPORTED: [Chain; 10] = [
        Self::Ethereum,
        Self::Polygon,
        Self::Optimism,
        Self::Arbitrum,
        Self::Celo,
        Self::Bnb,
        Self::Avalanche,
        Self::Base,
        Self::EthereumGoerli,
        Self::EthereumSepolia,
    ];

    pub fn from_id(chain_id: u64) -> Option<Self> {
        let chain = match chain_id {
            1 => Self::Ethereum,
            5 => Self::EthereumGoerli,
            11155111 => Self::EthereumSepolia,
            10 => Self::Optimism,
            56 => Self::Bnb,
            137 => Self::Polygon,
            8453 => Self::Base,
            42161 => Self::Arbitrum,
            42220 => Self::Celo,
            43114 => Self::Avalanche,
            _ => return None,
        };
        Some(chain)
    }

    pub fn id(self) -> u64 {
        match self {
            Self::Ethereum => 1,
            Self::EthereumGoerli => 5,
            Self::EthereumSepolia => 11155111,
            Self::Optimism => 10,
            Self::Bnb => 56,
            Self::Polygon => 137,
            Self::Base => 8453,
            Self::Arbitrum => 42161,
            Self::Celo => 42220,
            Self::Avalanche => 43114,
        }
    }

    /// Backend (GraphQL) chain name.
    pub fn backend_name(self) -> &'static str {
        match self {
            Self::Ethereum => "ETHEREUM",
            Self::EthereumGoerli => "ETHEREUM_GOERLI",
            Self::EthereumSepolia => "ETHEREUM_SEPOLIA",
            Self::Optimism => "OPTIMISM",
            Self::Bnb => "BNB",
            Self::Polygon => "POLYGON",
            Self::Base => "BASE",
            Self::Arbitrum => "ARBITRUM",
            Self::Celo => "CELO",
            Self::Avalanche => "AVALANCHE",
        }
    }

    /// Human-readable network name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::EthereumGoerli => "Görli",
            Self::EthereumSepolia => "Sepolia",
            Self::Optimism => "Optimism",
            Self::Bnb => "BNB Chain",
            Self::Polygon => "Polygon",
            Self::Base => "Base",
            Self::Arbitrum => "Arbitrum",
            Self::Celo => "Celo",
            Self::Avalanche => "Avalanche",
        }
    }

    /// `0x`-prefixed hex id, as EIP-1193 requests expect.
    pub fn hex_id(self) -> String {
        format!("{:#x}", self.id())
    }
}

/// Backend chain name for an optional chain id; unknown or absent ids map to mainnet.
pub fn chain_id_to_backend_name(chain_id: Option<u64>) -> &'static str {
    chain_id
        .and_then(Chain::from_id)
        .unwrap_or(Chain::Ethereum)
        .backend_name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_lookup_is_consistent() {
        for chain in Chain::SUPPORTED {
            assert_eq!(Chain::from_id(chain.id()), Some(chain));
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(Chain::from_id(0), None);
        assert_eq!(Chain::from_id(999_999), None);
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(chain_id_to_backend_name(Some(1)), "ETHEREUM");
        assert_eq!(chain_id_to_backend_name(Some(42161)), "ARBITRUM");
        assert_eq!(chain_id_to_backend_name(Some(5)), "ETHEREUM_GOERLI");
        assert_eq!(chain_id_to_backend_name(None), "ETHEREUM");
        assert_eq!(chain_id_to_backend_name(Some(12345)), "ETHEREUM");
    }

    #[test]
    fn test_hex_id() {
        assert_eq!(Chain::Ethereum.hex_id(), "0x1");
        assert_eq!(Chain::Polygon.hex_id(), "0x89");
        assert_eq!(Chain::Arbitrum.hex_id(), "0xa4b1");
    }
}
