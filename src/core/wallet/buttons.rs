//! Wallet button state machine.
//!
//! The rendered affordances are a pure function of the adapter status, the
//! modal flag and the device context ([`buttons_view`]). The two async flows
//! ([`connect_selected`], [`disconnect_current`]) catch every wallet failure,
//! log it and turn it into a toast.

use crate::core::notify::Notifier;
use crate::core::wallet::adapter::{ConnectOutcome, WalletAdapter};
use crate::models::{DeviceContext, KnownWallet, WalletDescriptor};

pub const CONNECT_LABEL: &str = "Connect Wallet";
pub const DESKTOP_ONLY_LABEL: &str = "Connect Wallet - Desktop Only";
pub const DISCONNECT_LABEL: &str = "Disconnect";
pub const LOADING_LABEL: &str = "Loading...";
pub const NO_COMPATIBLE_LABEL: &str = "No compatible wallets found";

pub const CONNECTED_MESSAGE: &str = "Wallet successfully connected!";
pub const CONNECT_FAILED_MESSAGE: &str = "Failed to connect wallet. Please try again.";
pub const DISCONNECTED_MESSAGE: &str = "Wallet successfully disconnected!";
pub const DISCONNECT_FAILED_MESSAGE: &str = "Failed to disconnect wallet. Please try again.";

// ============================================================================
// View derivation
// ============================================================================

/// How the connect button for one wallet behaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectAffordance {
    /// Wallet is installed or loadable; connect directly.
    Ready,
    /// Mobile browser and the wallet has an app; connect opens the deep link.
    DeepLink,
    /// Mobile browser and the wallet has no app.
    DesktopOnly,
    /// Desktop browser without the wallet.
    NotReady,
}

impl ConnectAffordance {
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Ready | Self::DeepLink)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DesktopOnly => DESKTOP_ONLY_LABEL,
            Self::Ready | Self::DeepLink | Self::NotReady => CONNECT_LABEL,
        }
    }
}

/// The wallet offered inside the connect modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletOption {
    pub name: String,
    pub affordance: ConnectAffordance,
}

/// What the wallet buttons render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonsView {
    Disconnect,
    Loading,
    NoCompatibleWallet,
    /// `modal` is `Some` while the connect modal is open.
    Connect { modal: Option<WalletOption> },
}

/// A rendered button: its label and whether it accepts clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affordance {
    pub label: &'static str,
    pub enabled: bool,
}

impl ButtonsView {
    /// The always-visible header button.
    pub fn primary(&self) -> Affordance {
        match self {
            Self::Disconnect => Affordance {
                label: DISCONNECT_LABEL,
                enabled: true,
            },
            Self::Loading => Affordance {
                label: LOADING_LABEL,
                enabled: false,
            },
            Self::NoCompatibleWallet => Affordance {
                label: NO_COMPATIBLE_LABEL,
                enabled: false,
            },
            Self::Connect { .. } => Affordance {
                label: CONNECT_LABEL,
                enabled: true,
            },
        }
    }

    /// Every button on screen, header first, then the modal's.
    pub fn affordances(&self) -> Vec<Affordance> {
        let mut buttons = vec![self.primary()];
        if let Self::Connect {
            modal: Some(option),
        } = self
        {
            buttons.push(Affordance {
                label: option.affordance.label(),
                enabled: option.affordance.is_enabled(),
            });
        }
        buttons
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self, Self::Connect { modal: Some(_) })
    }
}

/// Wallets this app can drive, in the order supplied.
pub fn compatible_wallets(wallets: &[WalletDescriptor]) -> Vec<&KnownWallet> {
    wallets
        .iter()
        .filter_map(|descriptor| match descriptor {
            WalletDescriptor::Known(wallet) => Some(wallet),
            WalletDescriptor::Unknown { .. } => None,
        })
        .collect()
}

/// Connect behavior for `wallet` on this device.
pub fn connect_affordance(wallet: &KnownWallet, device: DeviceContext) -> ConnectAffordance {
    if wallet.ready_state.is_ready() {
        ConnectAffordance::Ready
    } else if device.redirectable {
        if wallet.deeplink_provider.is_some() {
            ConnectAffordance::DeepLink
        } else {
            ConnectAffordance::DesktopOnly
        }
    } else {
        ConnectAffordance::NotReady
    }
}

/// The wallet the connect modal offers: the first one that can be connected
/// on this device, otherwise the first compatible one.
fn offered_wallet(compatible: &[&KnownWallet], device: DeviceContext) -> Option<WalletOption> {
    let options = compatible.iter().map(|wallet| WalletOption {
        name: wallet.name.clone(),
        affordance: connect_affordance(wallet, device),
    });
    let mut first = None;
    for option in options {
        if option.affordance.is_enabled() {
            return Some(option);
        }
        first.get_or_insert(option);
    }
    first
}

/// Derive the rendered buttons from the adapter status and local UI state.
pub fn buttons_view(
    connected: bool,
    is_loading: bool,
    wallets: &[WalletDescriptor],
    modal_open: bool,
    device: DeviceContext,
) -> ButtonsView {
    if connected {
        return ButtonsView::Disconnect;
    }
    if is_loading || wallets.is_empty() {
        return ButtonsView::Loading;
    }

    let compatible = compatible_wallets(wallets);
    let Some(offered) = offered_wallet(&compatible, device) else {
        return ButtonsView::NoCompatibleWallet;
    };

    let modal = modal_open.then_some(offered);
    ButtonsView::Connect { modal }
}

/// Same as [`buttons_view`], reading the status from an adapter.
pub fn adapter_view<A: WalletAdapter>(
    adapter: &A,
    modal_open: bool,
    device: DeviceContext,
) -> ButtonsView {
    buttons_view(
        adapter.connected(),
        adapter.is_loading(),
        &adapter.wallets(),
        modal_open,
        device,
    )
}

// ============================================================================
// Flows
// ============================================================================

/// Connect to `name` and report the outcome.
///
/// Returns the outcome on success; failures are logged, surfaced as exactly
/// one error toast and swallowed. The caller closes the modal either way.
pub async fn connect_selected<A: WalletAdapter, N: Notifier>(
    adapter: &A,
    notifier: &N,
    name: &str,
) -> Option<ConnectOutcome> {
    match adapter.connect(name).await {
        Ok(ConnectOutcome::Connected(address)) => {
            log::info!("connected {} ({})", name, address);
            notifier.success(CONNECTED_MESSAGE);
            Some(ConnectOutcome::Connected(address))
        }
        Ok(ConnectOutcome::Redirected) => {
            log::info!("redirecting to {} app", name);
            Some(ConnectOutcome::Redirected)
        }
        Err(e) => {
            log::warn!("{}", e);
            notifier.error(CONNECT_FAILED_MESSAGE);
            None
        }
    }
}

/// Disconnect and report the real outcome.
///
/// The adapter ends up disconnected regardless; only the toast differs.
pub async fn disconnect_current<A: WalletAdapter, N: Notifier>(adapter: &A, notifier: &N) -> bool {
    match adapter.disconnect().await {
        Ok(()) => {
            notifier.success(DISCONNECTED_MESSAGE);
            true
        }
        Err(e) => {
            log::warn!("{}", e);
            notifier.error(DISCONNECT_FAILED_MESSAGE);
            false
        }
    }
}
