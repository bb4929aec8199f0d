//! Pet avatar and the shuffle control.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::hooks::use_cooldown;
use crate::components::icons as ic;
use crate::config::SHUFFLE_FEEDBACK_MS;
use crate::core::PetStore;

stylance::import_crate_style!(css, "src/components/pet/pet.module.css");

/// The pet drawn as stacked part images, back to front.
#[component]
pub fn PetImage(pet: PetStore) -> impl IntoView {
    let layers = Memo::new(move |_| pet.parts().layers());

    view! {
        <div class=css::frame>
            {move || {
                layers
                    .get()
                    .into_iter()
                    .map(|src| view! { <img class=css::layer src=src alt="" draggable="false" /> })
                    .collect_view()
            }}
        </div>
    }
}

/// Randomizes every part of the pet.
///
/// Shows "Shuffling..." and ignores clicks for a short moment after each
/// shuffle so repeated clicks are visible.
#[component]
pub fn ShuffleButton(pet: PetStore) -> impl IntoView {
    let (busy, start) = use_cooldown(SHUFFLE_FEEDBACK_MS);

    let on_click = move |_: leptos::ev::MouseEvent| {
        if start() {
            pet.shuffle();
        }
    };

    view! {
        <button type="button" class=css::shuffle disabled=busy on:click=on_click>
            <Show
                when=move || busy.get()
                fallback=|| view! {
                    <Icon icon=ic::SHUFFLE />
                    <span>"Shuffle"</span>
                }
            >
                <span class=css::pulse>"Shuffling..."</span>
            </Show>
        </button>
    }
}

/// Pet image with its shuffle button underneath.
#[component]
pub fn ShufflePetImage(pet: PetStore) -> impl IntoView {
    view! {
        <div class=css::pet>
            <PetImage pet />
            <ShuffleButton pet />
        </div>
    }
}
