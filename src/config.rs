//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the document title and brand icon tooltip.
pub const APP_NAME: &str = "Uniswap";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

/// Id of the element the app mounts into (see `index.html`).
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Routes
// =============================================================================

/// Route constants shared by the router and the navigation bar.
pub mod routes {
    /// Landing page path.
    pub const HOME_PATH: &str = "/";

    /// Query string marking navigation triggered from the brand icon.
    /// The landing page uses it to show onboarding content.
    pub const INTRO_QUERY: &str = "?intro=true";

    /// Swap tab target.
    pub const SWAP_PATH: &str = "/swap";

    /// Pools tab target.
    pub const POOLS_PATH: &str = "/pools/v2";

    /// Extra prefixes that highlight the Pools tab.
    pub const POOLS_ACTIVE_PREFIXES: &[&str] =
        &["/pools", "/pool", "/add", "/remove", "/increase", "/find"];

    /// Prefix of every NFT page.
    pub const NFT_PREFIX: &str = "/nfts";
}

// =============================================================================
// Layout
// =============================================================================

/// Viewport width thresholds (CSS pixels) for [`crate::core::Breakpoint`].
pub mod breakpoints {
    /// Smallest width treated as `Large`.
    pub const LARGE_MIN_PX: u32 = 1024;
    /// Smallest width treated as `ExtraLarge`.
    pub const EXTRA_LARGE_MIN_PX: u32 = 1536;
}

// =============================================================================
// Wallet Configuration
// =============================================================================

/// localStorage key for wallet session persistence.
pub const WALLET_SESSION_KEY: &str = "wallet_session";

/// Wallet request timeout in milliseconds.
pub const WALLET_TIMEOUT_MS: i32 = 2000;

/// Ethereum address display formatting.
pub mod eth_address {
    /// Length of a full `0x`-prefixed address.
    pub const FULL_LEN: usize = 42;
    /// Characters kept at the start (including `0x`).
    pub const PREFIX_LEN: usize = 6;
    /// Index where the kept suffix begins.
    pub const SUFFIX_START: usize = 38;
}

// =============================================================================
// Feature Flags
// =============================================================================

/// Feature toggles injected into the app context.
///
/// Flags are plain booleans decided at startup; nothing here evaluates
/// them remotely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Transparent navigation bar over the redesigned landing page.
    pub new_landing_page: bool,
}

impl FeatureFlags {
    pub const DEFAULT: Self = Self {
        new_landing_page: true,
    };
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
