//! Wallet buttons in the header.
//!
//! What is rendered comes from [`adapter_view`]; this component only owns the
//! modal flag and the in-flight request flag, and runs the connect and
//! disconnect flows on click.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::ToastQueue;
use crate::core::wallet::BrowserWallets;
use crate::core::wallet::buttons::{
    ButtonsView, WalletOption, adapter_view, connect_selected, disconnect_current,
};

stylance::import_crate_style!(css, "src/components/wallet_buttons/wallet_buttons.module.css");

#[component]
pub fn WalletButtons(wallet: BrowserWallets, toasts: ToastQueue) -> impl IntoView {
    let (modal_open, set_modal_open) = signal(false);
    // Disables every wallet button while a request is in flight.
    let (pending, set_pending) = signal(false);

    let device = wallet.device();
    let buttons = Memo::new(move |_| adapter_view(&wallet, modal_open.get(), device));

    let connect = move |name: String| {
        set_pending.set(true);
        spawn_local(async move {
            connect_selected(&wallet, &toasts, &name).await;
            set_modal_open.set(false);
            set_pending.set(false);
        });
    };

    let disconnect = move || {
        set_pending.set(true);
        spawn_local(async move {
            disconnect_current(&wallet, &toasts).await;
            set_pending.set(false);
        });
    };

    let on_primary = move |_: leptos::ev::MouseEvent| match buttons.get_untracked() {
        ButtonsView::Disconnect => disconnect(),
        ButtonsView::Connect { .. } => set_modal_open.set(true),
        ButtonsView::Loading | ButtonsView::NoCompatibleWallet => {}
    };

    let primary = move || {
        let state = buttons.get();
        let affordance = state.primary();
        let icon = match state {
            ButtonsView::Disconnect => ic::DISCONNECT,
            ButtonsView::Loading => ic::LOADER,
            ButtonsView::NoCompatibleWallet | ButtonsView::Connect { .. } => ic::WALLET,
        };
        view! {
            <button
                class=css::primary
                disabled=move || !affordance.enabled || pending.get()
                on:click=on_primary
            >
                <Icon icon=icon />
                <span>{affordance.label}</span>
            </button>
        }
    };

    let modal = move || match buttons.get() {
        ButtonsView::Connect {
            modal: Some(option),
        } => Some(wallet_modal(option, pending, set_modal_open, connect)),
        _ => None,
    };

    view! {
        <div class=css::buttons>
            {primary}
            {modal}
        </div>
    }
}

fn wallet_modal(
    option: WalletOption,
    pending: ReadSignal<bool>,
    set_modal_open: WriteSignal<bool>,
    connect: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    let WalletOption { name, affordance } = option;
    let selected = name.clone();
    let close = move |_: leptos::ev::MouseEvent| set_modal_open.set(false);

    view! {
        <div class=css::backdrop on:click=close>
            <div
                class=css::modal
                role="dialog"
                aria-modal="true"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <div class=css::modalHeader>
                    <h2 class=css::modalTitle>"Select a wallet"</h2>
                    <button class=css::close aria-label="Close" on:click=close>
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
                <button
                    class=css::walletOption
                    disabled=move || !affordance.is_enabled() || pending.get()
                    on:click=move |_| connect(selected.clone())
                >
                    <span class=css::walletName>
                        <Icon icon=ic::WALLET />
                        {name}
                    </span>
                    <span class=css::walletAction>{affordance.label()}</span>
                </button>
            </div>
        </div>
    }
}
