//! Custom error types for the application.
//!
//! - [`WalletError`] - Aptos wallet detection, connect and disconnect errors
//!
//! Every variant is recoverable: callers log it and surface a toast.

use thiserror::Error;

/// Wallet-related errors for the injected Aptos wallets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// The requested wallet is not injected into the page
    #[error("{0} is not installed")]
    NotInstalled(String),
    /// The wallet refused or failed the connect request
    #[error("Failed to connect wallet: {0}")]
    ConnectFailed(String),
    /// The wallet failed the disconnect request
    #[error("Failed to disconnect wallet: {0}")]
    DisconnectFailed(String),
    /// The wallet answered with something other than an account
    #[error("Unexpected response from wallet")]
    InvalidResponse,
}
