//! Wallet connection.
//!
//! - [`WalletAdapter`] - the capability the UI drives
//! - [`BrowserWallets`] - implementation over the injected Aptos wallets
//! - [`buttons`] - the wallet button state machine and its async flows
//! - [`device`] - user agent classification for deep links

mod adapter;
mod browser;
pub mod buttons;
pub mod device;

pub use adapter::{ConnectOutcome, WalletAdapter};
pub use browser::BrowserWallets;
