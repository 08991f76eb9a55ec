//! Account drawer.
//!
//! Slide-over panel with the connected account. Its open state lives in
//! [`AppContext::drawer`]; the wallet status button and the brand icon
//! toggle or close it from the navigation bar.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{DrawerState, WalletState};

stylance::import_crate_style!(css, "src/components/drawer/drawer.module.css");

#[component]
pub fn AccountDrawer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let address = Signal::derive(move || {
        ctx.wallet
            .with(|w| w.address().map(str::to_string))
            .unwrap_or_default()
    });
    let network = Signal::derive(move || ctx.wallet.with(WalletState::display_chain).label());

    view! {
        <Show when=move || ctx.drawer.get().is_open()>
            <aside class=css::drawer data-testid="account-drawer">
                <header class=css::header>
                    <span class=css::title>"Account"</span>
                    <button
                        class=css::iconButton
                        title="Close"
                        on:click=move |_| ctx.drawer.update(DrawerState::close)
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=css::address>{address}</div>

                <div class=css::network>
                    <Icon icon=ic::NETWORK />
                    <span>{network}</span>
                </div>

                <button class=css::disconnect on:click=move |_| ctx.disconnect()>
                    <Icon icon=ic::DISCONNECT />
                    <span>"Disconnect"</span>
                </button>
            </aside>
        </Show>
    }
}
