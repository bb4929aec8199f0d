//! The wallet capability consumed by the connect UI.

use crate::core::error::WalletError;
use crate::models::WalletDescriptor;

/// Result of a successful connect request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// The wallet approved and returned this account address.
    Connected(String),
    /// The browser is being sent to the wallet app through its deep link.
    Redirected,
}

/// Connection capability over the available wallets.
///
/// Status readers are tracked when the implementation is signal-backed, so a
/// view that calls them re-renders on change.
#[allow(async_fn_in_trait)]
pub trait WalletAdapter {
    fn wallets(&self) -> Vec<WalletDescriptor>;
    fn connected(&self) -> bool;
    fn is_loading(&self) -> bool;
    async fn connect(&self, name: &str) -> Result<ConnectOutcome, WalletError>;
    /// Always leaves the adapter disconnected, even when the wallet reports an error.
    async fn disconnect(&self) -> Result<(), WalletError>;
}
