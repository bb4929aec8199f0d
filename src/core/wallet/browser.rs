//! Aptos wallets injected into the page.
//!
//! Detection, connect and disconnect go through a small JavaScript shim over
//! the providers the wallets inject (`window.aptos`, `window.martian`,
//! `window.nightly.aptos`, `window.pontem`). [`BrowserWallets`] keeps the
//! result in signals so views re-render on change.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::{WALLET_DETECT_ATTEMPTS, WALLET_DETECT_INTERVAL_MS, WALLET_SESSION_KEY};
use crate::core::error::WalletError;
use crate::core::wallet::adapter::{ConnectOutcome, WalletAdapter};
use crate::core::wallet::buttons::{ConnectAffordance, connect_affordance};
use crate::models::{
    DeviceContext, KnownWallet, RawWalletDescriptor, WalletDescriptor, WalletReadyState,
    WalletState,
};
use crate::utils::dom;

// ============================================================================
// JavaScript interop
// ============================================================================

#[wasm_bindgen(inline_js = "
const PROVIDERS = [
    {
        name: 'Petra',
        get: () => window.aptos,
        url: 'https://petra.app/',
        deeplinkProvider: 'https://petra.app/explore?link=',
    },
    {
        name: 'Martian',
        get: () => window.martian,
        url: 'https://martianwallet.xyz/',
    },
    {
        name: 'Nightly',
        get: () => window.nightly && window.nightly.aptos,
        url: 'https://nightly.app/',
    },
    {
        name: 'Pontem',
        get: () => window.pontem,
        url: 'https://pontem.network/pontem-wallet',
    },
];

function providerFor(name) {
    const entry = PROVIDERS.find((p) => p.name === name);
    return entry ? entry.get() : undefined;
}

function addressOf(account) {
    if (!account) return null;
    const address = account.address !== undefined ? account.address : account;
    if (typeof address === 'string') return address;
    return address && typeof address.toString === 'function' ? address.toString() : null;
}

export function detectAptosWallets() {
    return PROVIDERS.map((p) => {
        const provider = p.get();
        // Injected objects without connect() cannot be driven by this page.
        if (provider && typeof provider.connect !== 'function') {
            return { name: p.name };
        }
        return {
            name: p.name,
            readyState: provider ? 'Installed' : 'NotDetected',
            deeplinkProvider: p.deeplinkProvider,
            url: p.url,
        };
    });
}

export async function connectAptosWallet(name) {
    const provider = providerFor(name);
    if (!provider) throw new Error(name + ' is not installed');
    const response = await provider.connect();
    let address = addressOf(response);
    if (!address && typeof provider.account === 'function') {
        address = addressOf(await provider.account());
    }
    return address;
}

export async function disconnectAptosWallet(name) {
    const provider = providerFor(name);
    if (provider && typeof provider.disconnect === 'function') {
        await provider.disconnect();
    }
}
")]
extern "C" {
    #[wasm_bindgen(js_name = detectAptosWallets)]
    fn detect_aptos_wallets() -> JsValue;

    #[wasm_bindgen(catch, js_name = connectAptosWallet)]
    async fn connect_aptos_wallet(name: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = disconnectAptosWallet)]
    async fn disconnect_aptos_wallet(name: &str) -> Result<JsValue, JsValue>;
}

/// Human readable text of a thrown JS value.
fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", value),
    }
}

/// One detection pass over the injected providers.
fn detect() -> Vec<WalletDescriptor> {
    match serde_wasm_bindgen::from_value::<Vec<RawWalletDescriptor>>(detect_aptos_wallets()) {
        Ok(raw) => raw.into_iter().map(WalletDescriptor::from).collect(),
        Err(e) => {
            log::warn!("wallet detection returned an unexpected shape: {}", e);
            Vec::new()
        }
    }
}

async fn connect_injected(name: &str) -> Result<String, WalletError> {
    let response = connect_aptos_wallet(name)
        .await
        .map_err(|e| WalletError::ConnectFailed(js_message(&e)))?;
    response.as_string().ok_or(WalletError::InvalidResponse)
}

/// Send the browser to the wallet app, which reopens this page inside it.
fn open_deep_link(prefix: &str) -> Result<(), WalletError> {
    let window = dom::window().ok_or(WalletError::NoWindow)?;
    let location = window.location();
    let href = location.href().map_err(|_| WalletError::NoWindow)?;
    let target = format!("{}{}", prefix, js_sys::encode_uri_component(&href));
    location
        .set_href(&target)
        .map_err(|e| WalletError::ConnectFailed(js_message(&e)))
}

// ============================================================================
// Session (auto-connect hint)
// ============================================================================

fn stored_session() -> Option<String> {
    dom::local_storage().and_then(|s| s.get_item(WALLET_SESSION_KEY).ok().flatten())
}

fn save_session(name: &str) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(WALLET_SESSION_KEY, name);
    }
}

fn clear_session() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(WALLET_SESSION_KEY);
    }
}

// ============================================================================
// Detection policy
// ============================================================================

/// Whether a detection pass found an injected wallet, which ends polling.
fn any_installed(wallets: &[WalletDescriptor]) -> bool {
    wallets.iter().any(|w| {
        matches!(
            w,
            WalletDescriptor::Known(KnownWallet {
                ready_state: WalletReadyState::Installed,
                ..
            })
        )
    })
}

fn find_known<'a>(wallets: &'a [WalletDescriptor], name: &str) -> Option<&'a KnownWallet> {
    wallets.iter().find_map(|w| match w {
        WalletDescriptor::Known(wallet) if wallet.name == name => Some(wallet),
        _ => None,
    })
}

/// The remembered wallet, if it can be reconnected without user interaction.
fn restorable_wallet(stored: Option<&str>, wallets: &[WalletDescriptor]) -> Option<String> {
    let name = stored?;
    find_known(wallets, name)
        .filter(|wallet| wallet.ready_state.is_ready())
        .map(|wallet| wallet.name.clone())
}

// ============================================================================
// Adapter
// ============================================================================

/// Signal-backed [`WalletAdapter`] over the injected Aptos wallets.
#[derive(Clone, Copy)]
pub struct BrowserWallets {
    wallets: RwSignal<Vec<WalletDescriptor>>,
    state: RwSignal<WalletState>,
    device: DeviceContext,
}

impl BrowserWallets {
    /// Starts in [`WalletState::Loading`] with no wallets; call [`init`](Self::init).
    pub fn new(device: DeviceContext) -> Self {
        Self {
            wallets: RwSignal::new(Vec::new()),
            state: RwSignal::new(WalletState::Loading),
            device,
        }
    }

    /// Connection state (tracked).
    pub fn state(&self) -> WalletState {
        self.state.get()
    }

    pub fn device(&self) -> DeviceContext {
        self.device
    }

    /// Detect wallets, then silently reconnect the remembered one.
    ///
    /// Leaves the adapter out of `Loading` on every path.
    pub async fn init(self) {
        let mut wallets = detect();
        for _ in 1..WALLET_DETECT_ATTEMPTS {
            if any_installed(&wallets) {
                break;
            }
            gloo_timers::future::TimeoutFuture::new(WALLET_DETECT_INTERVAL_MS).await;
            wallets = detect();
        }
        log::debug!(
            "detected wallets: {:?}",
            wallets.iter().map(WalletDescriptor::name).collect::<Vec<_>>()
        );

        let stored = stored_session();
        let restore = restorable_wallet(stored.as_deref(), &wallets);
        self.wallets.set(wallets);

        let Some(name) = restore else {
            if stored.is_some() {
                clear_session();
            }
            self.state.set(WalletState::Disconnected);
            return;
        };

        match connect_injected(&name).await {
            Ok(address) => {
                log::info!("reconnected {} ({})", name, address);
                self.state.set(WalletState::Connected {
                    address,
                    wallet: name,
                });
            }
            Err(e) => {
                log::warn!("auto-connect to {} failed: {}", name, e);
                clear_session();
                self.state.set(WalletState::Disconnected);
            }
        }
    }
}

impl WalletAdapter for BrowserWallets {
    fn wallets(&self) -> Vec<WalletDescriptor> {
        self.wallets.get()
    }

    fn connected(&self) -> bool {
        self.state.with(WalletState::is_connected)
    }

    fn is_loading(&self) -> bool {
        self.state.with(WalletState::is_loading)
    }

    async fn connect(&self, name: &str) -> Result<ConnectOutcome, WalletError> {
        let wallet = self
            .wallets
            .with_untracked(|wallets| find_known(wallets, name).cloned())
            .ok_or_else(|| WalletError::NotInstalled(name.to_string()))?;

        match connect_affordance(&wallet, self.device) {
            ConnectAffordance::Ready => {
                let address = connect_injected(name).await?;
                save_session(name);
                self.state.set(WalletState::Connected {
                    address: address.clone(),
                    wallet: name.to_string(),
                });
                Ok(ConnectOutcome::Connected(address))
            }
            ConnectAffordance::DeepLink => {
                let prefix = wallet
                    .deeplink_provider
                    .as_deref()
                    .ok_or_else(|| WalletError::NotInstalled(name.to_string()))?;
                open_deep_link(prefix)?;
                Ok(ConnectOutcome::Redirected)
            }
            ConnectAffordance::DesktopOnly | ConnectAffordance::NotReady => {
                Err(WalletError::NotInstalled(name.to_string()))
            }
        }
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        let name = self
            .state
            .with_untracked(|state| state.wallet_name().map(str::to_string));

        let Some(name) = name else {
            self.state.set(WalletState::Disconnected);
            return Ok(());
        };

        let result = disconnect_aptos_wallet(&name)
            .await
            .map(|_| ())
            .map_err(|e| WalletError::DisconnectFailed(js_message(&e)));

        clear_session();
        self.state.set(WalletState::Disconnected);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(name: &str, ready_state: WalletReadyState) -> WalletDescriptor {
        WalletDescriptor::Known(KnownWallet {
            name: name.to_string(),
            ready_state,
            deeplink_provider: None,
            url: None,
        })
    }

    #[test]
    fn test_polling_stops_on_installed_wallet() {
        let waiting = vec![
            known("Petra", WalletReadyState::NotDetected),
            WalletDescriptor::Unknown {
                name: "Pontem".to_string(),
            },
        ];
        assert!(!any_installed(&waiting));
        assert!(!any_installed(&[]));

        let found = vec![
            known("Petra", WalletReadyState::NotDetected),
            known("Martian", WalletReadyState::Installed),
        ];
        assert!(any_installed(&found));
    }

    #[test]
    fn test_restorable_wallet_requires_ready_known_entry() {
        let wallets = vec![
            known("Petra", WalletReadyState::Installed),
            known("Martian", WalletReadyState::NotDetected),
            WalletDescriptor::Unknown {
                name: "Pontem".to_string(),
            },
        ];

        assert_eq!(
            restorable_wallet(Some("Petra"), &wallets),
            Some("Petra".to_string())
        );
        assert_eq!(restorable_wallet(Some("Martian"), &wallets), None);
        assert_eq!(restorable_wallet(Some("Pontem"), &wallets), None);
        assert_eq!(restorable_wallet(Some("Unheard"), &wallets), None);
        assert_eq!(restorable_wallet(None, &wallets), None);
    }

    #[test]
    fn test_new_adapter_is_loading_without_wallets() {
        let owner = Owner::new();
        owner.with(|| {
            let adapter = BrowserWallets::new(DeviceContext::default());
            assert!(adapter.is_loading());
            assert!(!adapter.connected());
            assert!(adapter.wallets().is_empty());
            assert_eq!(adapter.state(), WalletState::Loading);
        });
    }

    #[tokio::test]
    async fn test_connect_unknown_name_fails_before_touching_the_page() {
        let owner = Owner::new();
        let adapter = owner.with(|| BrowserWallets::new(DeviceContext::default()));
        adapter
            .wallets
            .set(vec![known("Petra", WalletReadyState::Installed)]);

        let result = adapter.connect("Martian").await;
        assert_eq!(result, Err(WalletError::NotInstalled("Martian".to_string())));
        assert!(!adapter.connected());
    }

    #[tokio::test]
    async fn test_connect_not_ready_wallet_on_desktop_fails() {
        let owner = Owner::new();
        let adapter = owner.with(|| BrowserWallets::new(DeviceContext::default()));
        adapter
            .wallets
            .set(vec![known("Petra", WalletReadyState::NotDetected)]);

        let result = adapter.connect("Petra").await;
        assert_eq!(result, Err(WalletError::NotInstalled("Petra".to_string())));
    }

    #[tokio::test]
    async fn test_disconnect_without_wallet_ends_disconnected() {
        let owner = Owner::new();
        let adapter = owner.with(|| BrowserWallets::new(DeviceContext::default()));

        assert_eq!(adapter.disconnect().await, Ok(()));
        assert_eq!(adapter.state.get_untracked(), WalletState::Disconnected);
    }
}
