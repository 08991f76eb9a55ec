//! Backdrop drawn behind the account drawer.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::DrawerState;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Full-viewport blur overlay. Clicking it closes the account drawer.
#[component]
pub fn Blur() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div
            class=css::blur
            data-testid="nav-blur"
            on:click=move |_| ctx.drawer.update(DrawerState::close)
        ></div>
    }
}
