//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Window, storage and history access
//! - [`log`] - Browser console logging
//! - [`race_with_timeout`] - Promise timeout racing

pub mod dom;
pub mod log;
mod promise;

pub use promise::{RaceResult, race_with_timeout};
