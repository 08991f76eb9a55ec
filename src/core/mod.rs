//! Core navigation logic.
//!
//! This module provides:
//! - [`is_active`] and [`Tab`] for route-based tab highlighting
//! - [`is_visible`] over [`Widget`] x [`Breakpoint`] for responsive layout
//! - [`on_icon_click`] for the brand icon click sequence
//! - [`Chain`] lookup and the [`wallet`] provider bridge

mod activation;
mod chain;
pub mod error;
mod intent;
mod tabs;
mod visibility;
pub mod wallet;

pub use activation::is_active;
pub use chain::{Chain, chain_id_to_backend_name};
pub use intent::{IconClickAction, IconClickEffects, IconClickState, on_icon_click};
pub use tabs::{NavTabs, Tab};
pub use visibility::{Breakpoint, Widget, WidgetGroup, is_visible};
