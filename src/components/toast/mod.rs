//! Toast notifications.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::ToastQueue;
use crate::models::{Toast, ToastKind};

stylance::import_crate_style!(css, "src/components/toast/toast.module.css");

/// Renders the toast queue in the bottom corner. Clicking a toast dismisses it.
#[component]
pub fn Toaster(toasts: ToastQueue) -> impl IntoView {
    view! {
        <div class=css::toaster role="status" aria-live="polite">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let (kind_class, icon) = match toast.kind {
                        ToastKind::Success => (css::success, ic::SUCCESS),
                        ToastKind::Error => (css::error, ic::ERROR),
                    };
                    let class = format!("{} {}", css::toast, kind_class);
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            <Icon icon=icon />
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
