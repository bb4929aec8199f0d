mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    // Fall back to <body> when the page has no #app mount point.
    match document().get_element_by_id("app") {
        Some(root) => mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget(),
        None => mount_to_body(App),
    }
}
