//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`navbar`] - Responsive navigation bar
//! - [`drawer`] - Account drawer
//! - [`pages`] - Page placeholders behind the bar
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod drawer;
pub mod icons;
pub mod navbar;
pub mod pages;
pub mod router;

pub use router::AppRouter;
