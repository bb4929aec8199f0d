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
        LuCircleAlert as Error, LuCircleCheck as Success, LuLoader as Loader,
        LuLogOut as Disconnect, LuShuffle as Shuffle, LuUser as User, LuWallet as Wallet,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Loader, BsBoxArrowRight as Disconnect, BsCheckCircleFill as Success,
        BsExclamationCircleFill as Error, BsPerson as User, BsShuffle as Shuffle,
        BsWallet2 as Wallet, BsXLg as Close,
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

themed_icon!(SHUFFLE, Shuffle);
themed_icon!(WALLET, Wallet);
themed_icon!(DISCONNECT, Disconnect);
themed_icon!(LOADER, Loader);
themed_icon!(CLOSE, Close);
themed_icon!(USER, User);
themed_icon!(SUCCESS, Success);
themed_icon!(ERROR, Error);
