//! Network selector dropdown.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{Chain, wallet};
use crate::models::WalletState;
use crate::utils::log;

stylance::import_crate_style!(css, "src/components/navbar/chain_selector.module.css");

/// Shows the active network and lists [`Chain::SUPPORTED`].
///
/// Picking a network only asks the wallet provider to switch; the new chain
/// arrives through the provider's `chainChanged` event.
///
/// # Props
/// - `left_align`: open the menu towards the right edge (inline placement)
#[component]
pub fn ChainSelector(#[prop(optional)] left_align: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let is_open = RwSignal::new(false);
    let current = Signal::derive(move || ctx.wallet.with(WalletState::display_chain));

    let menu_class = if left_align {
        format!("{} {}", css::menu, css::menuLeft)
    } else {
        css::menu.to_string()
    };

    let select = move |chain: Chain| {
        is_open.set(false);
        if !ctx.wallet.with_untracked(|w| w.needs_switch(chain)) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = wallet::switch_chain(chain).await {
                log::warn(&format!("switch to {} failed: {}", chain.label(), e));
            }
        });
    };

    view! {
        <div class=css::selector>
            <button
                class=css::trigger
                data-testid="chain-selector"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                <Icon icon=ic::NETWORK />
                <span class=css::label>{move || current.get().label()}</span>
                <Icon icon=ic::CHEVRON_DOWN />
            </button>

            <Show when=move || is_open.get()>
                <ul class=menu_class.clone()>
                    {Chain::SUPPORTED
                        .into_iter()
                        .map(|chain| {
                            view! {
                                <li>
                                    <button class=css::option on:click=move |_| select(chain)>
                                        <span>{chain.label()}</span>
                                        <Show when=move || current.get() == chain>
                                            <Icon icon=ic::CHECK />
                                        </Show>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
