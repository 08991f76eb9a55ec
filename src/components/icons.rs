//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Check, LuChevronDown as ChevronDown, LuGlobe as Network, LuHexagon as Brand,
        LuLogOut as Disconnect, LuWallet as Wallet, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowRight as Disconnect, BsCheck2 as Check, BsChevronDown as ChevronDown,
        BsGlobe as Network, BsHexagonFill as Brand, BsWallet2 as Wallet, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BRAND, Brand);
themed_icon!(CHECK, Check);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CLOSE, Close);
themed_icon!(DISCONNECT, Disconnect);
themed_icon!(NETWORK, Network);
themed_icon!(WALLET, Wallet);
