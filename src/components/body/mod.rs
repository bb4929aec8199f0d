//! Page body: the pet, the welcome text and the connected account.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::hooks::use_typing_effect;
use crate::components::icons as ic;
use crate::components::pet::ShufflePetImage;
use crate::config::{EARLY_ACCESS_URL, WELCOME_TEXT};
use crate::core::PetStore;
use crate::core::wallet::BrowserWallets;

stylance::import_crate_style!(css, "src/components/body/body.module.css");

#[component]
pub fn Body(wallet: BrowserWallets, pet: PetStore) -> impl IntoView {
    let text = use_typing_effect(WELCOME_TEXT.trim());
    let account = Memo::new(move |_| {
        let state = wallet.state();
        state.is_connected().then(|| state.display_name())
    });

    view! {
        <main class=css::body>
            <ShufflePetImage pet />
            <section class=css::welcome>
                <p class=css::title>"Welcome"</p>
                <p class=css::text>{text}</p>
                <p>
                    <a class=css::link href=EARLY_ACCESS_URL target="_blank" rel="noopener noreferrer">
                        "Get early access!"
                    </a>
                </p>
            </section>
            {move || account.get().map(|name| view! {
                <p class=css::account>
                    <Icon icon=ic::USER />
                    <span>"Connected as "</span>
                    <span class=css::address>{name}</span>
                </p>
            })}
        </main>
    }
}
