use crate::config::eth_address;
use crate::core::Chain;

/// Wallet connection state, as reported by the injected provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connecting,
    Connected {
        address: String,
        chain_id: Option<u64>,
    },
}

impl WalletState {
    /// Check if wallet is connected
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    /// Get chain ID if connected
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            WalletState::Connected { chain_id, .. } => *chain_id,
            _ => None,
        }
    }

    /// Connected address, if any
    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    /// Chain the selector should show; falls back to mainnet.
    pub fn display_chain(&self) -> Chain {
        self.chain_id()
            .and_then(Chain::from_id)
            .unwrap_or(Chain::Ethereum)
    }

    /// Whether selecting `chain` needs a provider switch.
    ///
    /// Compares against the reported chain id, not [`Self::display_chain`],
    /// so an unknown or missing chain can still be switched to mainnet.
    pub fn needs_switch(&self, chain: Chain) -> bool {
        self.chain_id() != Some(chain.id())
    }

    /// State after the provider reports `address` as the active account.
    ///
    /// A connected wallet keeps its chain id; otherwise the chain is unknown
    /// until it is queried.
    pub fn with_account(&self, address: String) -> WalletState {
        WalletState::Connected {
            address,
            chain_id: self.chain_id(),
        }
    }

    /// Format address for display (0x1234...5678)
    pub fn display_name(&self) -> String {
        match self {
            WalletState::Connected { address, .. } => shorten_address(address),
            WalletState::Connecting => "Connecting...".to_string(),
            WalletState::Disconnected => "Connect".to_string(),
        }
    }
}

fn shorten_address(address: &str) -> String {
    if address.len() < eth_address::FULL_LEN {
        return address.to_string();
    }
    match (
        address.get(..eth_address::PREFIX_LEN),
        address.get(eth_address::SUFFIX_START..),
    ) {
        (Some(prefix), Some(suffix)) => format!("{}...{}", prefix, suffix),
        _ => address.to_string(),
    }
}
