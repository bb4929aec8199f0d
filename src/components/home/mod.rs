//! Landing page layout.

use leptos::prelude::*;

use crate::components::body::Body;
use crate::components::falling_letters::FallingLetters;
use crate::components::header::Header;
use crate::core::wallet::BrowserWallets;
use crate::core::{PetStore, ToastQueue};

stylance::import_crate_style!(css, "src/components/home/home.module.css");

/// Falling letters behind a translucent card holding the header and body.
#[component]
pub fn Home(wallet: BrowserWallets, pet: PetStore, toasts: ToastQueue) -> impl IntoView {
    view! {
        <div class=css::page>
            <FallingLetters />
            <div class=css::content>
                <div class=css::card>
                    <Header wallet toasts />
                    <Body wallet pet />
                </div>
            </div>
        </div>
    }
}
