//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`AppRoute`], [`NavigationIntent`] - Hash-based navigation for IPFS compatibility
//! - [`WalletState`] - Web3 wallet connection state
//! - [`DrawerState`] - Account drawer visibility

mod drawer;
mod route;
mod wallet;

pub use drawer::DrawerState;
pub use route::{AppRoute, NavigationIntent};
pub use wallet::WalletState;
