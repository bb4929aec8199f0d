//! Page header with the title and the wallet buttons.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::wallet_buttons::WalletButtons;
use crate::config::{APP_NAME, COMPACT_HEADER_QUERY};
use crate::core::ToastQueue;
use crate::core::wallet::BrowserWallets;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

#[component]
pub fn Header(wallet: BrowserWallets, toasts: ToastQueue) -> impl IntoView {
    // Narrow screens leave the whole row to the wallet buttons.
    let compact = use_media_query(COMPACT_HEADER_QUERY);

    view! {
        <header class=css::header>
            <Show when=move || !compact.get()>
                <h1 class=css::title>{APP_NAME}</h1>
            </Show>
            <WalletButtons wallet toasts />
        </header>
    }
}
