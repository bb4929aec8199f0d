//! Root application module.
//!
//! Builds the application state handles and passes them down as props:
//! the pet store first, then the toast queue, then the wallet adapter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Home, Toaster};
use crate::config::APP_TAGLINE;
use crate::core::wallet::BrowserWallets;
use crate::core::{PetStore, ToastQueue};
use crate::models::{DEFAULT_PET, DeviceContext};
use crate::utils::dom;

/// Root application component with error boundary.
///
/// This component:
/// - Creates the pet store, toast queue and wallet adapter
/// - Starts wallet detection and auto-connect
/// - Wraps the page in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let pet = PetStore::new(DEFAULT_PET);
    let toasts = ToastQueue::new();
    let wallet = BrowserWallets::new(DeviceContext::detect());

    dom::set_title(APP_TAGLINE);
    spawn_local(wallet.init());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #000;
                    color: #e2e8f0;
                    font-family: monospace;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #0f172a;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #6c7a89;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #ff6b6b;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| dom::reload()
                            style="
                                background: #06b6d4;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-family: monospace;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Home wallet pet toasts />
        </ErrorBoundary>
        <Toaster toasts />
    }
}
