//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Welcome paragraph typed out on the landing page.
pub const WELCOME_TEXT: &str = include_str!("../assets/text/welcome.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the header.
pub const APP_NAME: &str = "Narwhal Moverz";

/// Short tagline used as the document title.
pub const APP_TAGLINE: &str = "Movegotchi - Your new favorite on-chain pet!";

/// Sign-up form for the early access list.
pub const EARLY_ACCESS_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSeKp6H03FAvY8x569EPqKCxR6m0kB8W-Ewvx35KM-cg1g7m9Q/viewform?usp=header";

// =============================================================================
// Wallet Configuration
// =============================================================================

/// localStorage key remembering the last connected wallet (auto-connect).
pub const WALLET_SESSION_KEY: &str = "aptos_wallet_name";

/// Number of detection passes before giving up on late-injected wallets.
pub const WALLET_DETECT_ATTEMPTS: u32 = 5;

/// Delay between detection passes in milliseconds.
pub const WALLET_DETECT_INTERVAL_MS: u32 = 200;

/// Aptos account addresses are `0x` + 64 hex chars.
pub mod aptos_address {
    /// Shortest address that gets abbreviated.
    pub const MIN_ABBREVIATED_LEN: usize = 12;
    /// Characters kept at the start (`0x` plus four hex digits).
    pub const PREFIX_LEN: usize = 6;
    /// Characters kept at the end.
    pub const SUFFIX_LEN: usize = 4;
}

// =============================================================================
// Notifications
// =============================================================================

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4000;

/// Maximum number of toasts visible at once. Older ones are dropped first.
pub const MAX_TOASTS: usize = 3;

// =============================================================================
// Pet Configuration
// =============================================================================

/// Base path of the layered pet part images.
pub const PET_PARTS_BASE_PATH: &str = "/pet-parts";

/// How long the shuffle button stays in its "Shuffling..." state.
pub const SHUFFLE_FEEDBACK_MS: u32 = 300;

// =============================================================================
// Animation Configuration
// =============================================================================

/// Falling letters background.
pub mod rain {
    /// Glyphs drawn by the animation.
    pub const GLYPHS: &str = "NARWHAL MOVERZ";
    /// Glyph size in pixels, also the column width and row height.
    pub const FONT_SIZE: f64 = 18.0;
    /// Period between frames (~30 fps).
    pub const TICK_MS: u32 = 33;
    /// Chance that a column which has left the screen restarts at the top on a given frame.
    pub const WRAP_PROBABILITY: f64 = 0.025;
    /// Translucent overlay that produces the trailing effect.
    pub const FADE_STYLE: &str = "rgba(0, 0, 0, 0.05)";
    /// Glyph color.
    pub const GLYPH_STYLE: &str = "#06b6d4";
}

/// Delay between revealed characters of the welcome text.
pub const TYPING_INTERVAL_MS: u32 = 40;

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query under which the header hides its title.
pub const COMPACT_HEADER_QUERY: &str = "(max-width: 640px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
