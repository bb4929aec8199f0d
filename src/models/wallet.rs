use serde::Deserialize;

use crate::config::aptos_address;

/// Wallet connection state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WalletState {
    /// Detection or auto-connect still in flight.
    #[default]
    Loading,
    Disconnected,
    Connected {
        address: String,
        wallet: String,
    },
}

impl WalletState {
    /// Check if wallet is connected
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, WalletState::Loading)
    }

    /// Name of the connected wallet, if any
    pub fn wallet_name(&self) -> Option<&str> {
        match self {
            WalletState::Connected { wallet, .. } => Some(wallet),
            _ => None,
        }
    }

    /// Format address for display (0x1234...cdef)
    pub fn display_name(&self) -> String {
        match self {
            WalletState::Connected { address, .. }
                if address.len() >= aptos_address::MIN_ABBREVIATED_LEN && address.is_ascii() =>
            {
                format!(
                    "{}...{}",
                    &address[..aptos_address::PREFIX_LEN],
                    &address[address.len() - aptos_address::SUFFIX_LEN..]
                )
            }
            WalletState::Connected { address, .. } => address.clone(),
            WalletState::Loading => "loading...".to_string(),
            WalletState::Disconnected => "guest".to_string(),
        }
    }
}

/// Availability of a wallet as reported by the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum WalletReadyState {
    /// Extension injected into the page.
    Installed,
    /// SDK wallet that does not rely on window injection.
    Loadable,
    NotDetected,
    Unsupported,
}

impl WalletReadyState {
    /// Whether connecting can go straight to the wallet without a redirect.
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Installed | Self::Loadable)
    }
}

/// A wallet that reports its ready state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnownWallet {
    pub name: String,
    pub ready_state: WalletReadyState,
    /// Prefix of the mobile deep link; the encoded dapp URL is appended.
    pub deeplink_provider: Option<String>,
    /// Install page.
    pub url: Option<String>,
}

/// Wallet entry as supplied by the browser.
///
/// Entries without a ready state use a descriptor shape this app cannot drive
/// and end up as [`WalletDescriptor::Unknown`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletDescriptor {
    Known(KnownWallet),
    Unknown { name: String },
}

impl WalletDescriptor {
    pub fn name(&self) -> &str {
        match self {
            Self::Known(wallet) => &wallet.name,
            Self::Unknown { name } => name,
        }
    }
}

/// Descriptor shape produced by the JS detection shim.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWalletDescriptor {
    pub name: String,
    #[serde(default)]
    pub ready_state: Option<WalletReadyState>,
    #[serde(default)]
    pub deeplink_provider: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<RawWalletDescriptor> for WalletDescriptor {
    fn from(raw: RawWalletDescriptor) -> Self {
        match raw.ready_state {
            Some(ready_state) => Self::Known(KnownWallet {
                name: raw.name,
                ready_state,
                deeplink_provider: raw.deeplink_provider,
                url: raw.url,
            }),
            None => Self::Unknown { name: raw.name },
        }
    }
}

/// Browser environment facts relevant to connecting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceContext {
    /// Mobile browser that is not a wallet's in-app browser.
    pub redirectable: bool,
}
