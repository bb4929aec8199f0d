//! UI components built with Leptos.
//!
//! - [`Home`] - Landing page (main entry point)
//! - [`header`] - Title bar with the wallet buttons
//! - [`wallet_buttons`] - Connect / disconnect controls and wallet modal
//! - [`body`] - Pet, welcome text and connected account
//! - [`pet`] - Layered pet image and shuffle button
//! - [`falling_letters`] - Canvas background animation
//! - [`toast`] - Notification toasts
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod body;
pub mod falling_letters;
pub mod header;
pub mod hooks;
pub mod home;
pub mod icons;
pub mod pet;
pub mod toast;
pub mod wallet_buttons;

pub use home::Home;
pub use toast::Toaster;
