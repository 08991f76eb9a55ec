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

    let Some(root) = document().get_element_by_id(config::MOUNT_ELEMENT_ID) else {
        utils::log::warn(&format!("missing #{} mount element", config::MOUNT_ELEMENT_ID));
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
