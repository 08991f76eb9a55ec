//! Custom error types for the application.
//!
//! - [`TabConfigError`] - Invalid navigation tab configuration
//! - [`WalletError`] - Wallet provider (EIP-1193) request errors

use thiserror::Error;

/// Rejected navigation tab configuration.
///
/// Tabs are static, so these surface at startup rather than per render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabConfigError {
    /// An empty prefix would mark the tab active on every route.
    #[error("tab href must not be empty")]
    EmptyHref,
    /// Hrefs are absolute paths.
    #[error("tab href '{0}' must start with '/'")]
    MissingLeadingSlash(String),
    /// Prefix matching is not slash-normalized.
    #[error("tab href '{0}' must not end with '/'")]
    TrailingSlash(String),
}

/// Wallet-related errors for EIP-1193 provider integration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// No injected provider (`window.ethereum`)
    #[error("No wallet found. Please install a browser wallet extension.")]
    NotInstalled,
    /// Failed to build or dispatch the request object
    #[error("Failed to create wallet request")]
    RequestCreationFailed,
    /// Request rejected by the user or the provider
    #[error("Wallet request rejected: {0}")]
    RequestRejected(String),
    /// No account returned from wallet
    #[error("No account returned from wallet")]
    NoAccount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_config_messages() {
        assert_eq!(TabConfigError::EmptyHref.to_string(), "tab href must not be empty");
        assert_eq!(
            TabConfigError::TrailingSlash("/swap/".to_string()).to_string(),
            "tab href '/swap/' must not end with '/'"
        );
    }

    #[test]
    fn test_wallet_messages() {
        assert_eq!(
            WalletError::RequestRejected("user denied".to_string()).to_string(),
            "Wallet request rejected: user denied"
        );
        assert_eq!(WalletError::NoAccount.to_string(), "No account returned from wallet");
    }
}
