//! Wallet connection status button.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::wallet;
use crate::models::{DrawerState, WalletState};
use crate::utils::log;

stylance::import_crate_style!(css, "src/components/navbar/web3_status.module.css");

/// Request accounts from the provider and record the result.
fn connect(ctx: AppContext) {
    ctx.wallet.set(WalletState::Connecting);
    wasm_bindgen_futures::spawn_local(async move {
        match wallet::connect().await {
            Ok(address) => {
                let chain_id = wallet::get_chain_id().await;
                wallet::save_session();
                ctx.wallet.set(WalletState::Connected { address, chain_id });
            }
            Err(e) => {
                log::warn(&format!("wallet connection failed: {}", e));
                ctx.wallet.set(WalletState::Disconnected);
            }
        }
    });
}

/// Status widget.
///
/// | State | Label | Click |
/// |-------|-------|-------|
/// | Disconnected | `Connect` | request accounts |
/// | Connecting | `Connecting...` | nothing |
/// | Connected | `0x1234...5678` | toggle account drawer |
#[component]
pub fn Web3Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let label = Signal::derive(move || ctx.wallet.with(WalletState::display_name));
    let is_connected = Signal::derive(move || ctx.wallet.with(WalletState::is_connected));

    let on_click = move |_: leptos::ev::MouseEvent| match ctx.wallet.get_untracked() {
        WalletState::Connected { .. } => ctx.drawer.update(DrawerState::toggle),
        WalletState::Connecting => {}
        WalletState::Disconnected => connect(ctx),
    };

    view! {
        <button
            class=move || if is_connected.get() { css::connected } else { css::connect }
            data-testid=move || {
                if is_connected.get() { "web3-status-connected" } else { "navbar-connect-wallet" }
            }
            on:click=on_click
        >
            <Icon icon=ic::WALLET />
            <span class=css::label>{label}</span>
        </button>
    }
}
