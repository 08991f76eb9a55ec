//! Responsive navigation bar.
//!
//! Layout (left to right): brand icon, inline chain selector, page tabs,
//! then the right-side chain selector and wallet status. Which chain
//! selector and which Pools tab are drawn depends on the viewport; see
//! [`crate::core::is_visible`].

mod blur;
mod chain_selector;
mod hooks;
mod web3_status;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::{IconClickEffects, IconClickState, Tab, on_icon_click};
use crate::models::{AppRoute, DrawerState, NavigationIntent, WalletState};
use crate::utils::log;

pub use blur::Blur;
pub use chain_selector::ChainSelector;
pub use hooks::{use_breakpoint, use_navbar_layout};
pub use web3_status::Web3Status;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

// ============================================================================
// Brand Icon Effects
// ============================================================================

/// Routes brand icon effects to the drawer store and the router.
struct NavbarEffects(AppContext);

impl IconClickEffects for NavbarEffects {
    fn close_drawer(&self) {
        self.0.drawer.update(DrawerState::close);
    }

    fn navigate_home(&self, intent: &NavigationIntent) {
        self.0.navigate(intent);
    }
}

// ============================================================================
// Tabs
// ============================================================================

/// Link for a single page tab, highlighted while its route is active.
#[component]
fn MenuItem(tab: Tab) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let href = format!("#{}", tab.href());
    let test_id = tab.test_id();
    let label = tab.label();
    let is_active = Signal::derive(move || ctx.route.with(|route| tab.is_active(&route.path)));

    view! {
        <a
            href=href
            class=move || if is_active.get() { css::activeMenuItem } else { css::menuItem }
            aria-current=move || is_active.get().then_some("page")
            data-testid=test_id
        >
            {label}
        </a>
    }
}

/// Row of primary page tabs.
///
/// Swap is always part of the row; Pools joins it only while the Pools tab
/// is presented as [`crate::core::Widget::PoolsTabInRow`].
#[component]
pub fn PageTabs(#[prop(into)] show_pools: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let tabs = ctx.tabs.get_value();
    let pools = tabs.pools;

    view! {
        <MenuItem tab=tabs.swap />
        <Show when=move || show_pools.get()>
            <MenuItem tab=pools.clone() />
        </Show>
    }
}

// ============================================================================
// Navbar
// ============================================================================

/// Navigation bar component.
///
/// # Props
/// - `blur`: draw the [`Blur`] overlay behind the bar
#[component]
pub fn Navbar(#[prop(into)] blur: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let breakpoint = use_breakpoint();

    let layout = use_navbar_layout(breakpoint, ctx.route);

    let show_inline_selector = move || layout.get().inline_selector;
    let show_right_selector = move || layout.get().right_selector;
    let show_page_tabs = move || layout.get().page_tabs;
    let show_pools_boxed = move || layout.get().pools_boxed;
    let show_pools_in_row = Signal::derive(move || layout.get().pools_in_row);

    let is_connected = Signal::derive(move || ctx.wallet.with(WalletState::is_connected));

    let nav_class = Signal::derive(move || {
        if ctx.flags.new_landing_page && ctx.route.with(AppRoute::is_landing_page) {
            format!("{} {}", css::nav, css::navTransparent)
        } else {
            css::nav.to_string()
        }
    });
    let logo_class = Signal::derive(move || {
        if is_connected.get() {
            css::logo.to_string()
        } else {
            format!("{} {}", css::logo, css::logoClickable)
        }
    });

    let on_logo_click = move |_: leptos::ev::MouseEvent| {
        let state = IconClickState {
            is_wallet_connected: ctx.wallet.with_untracked(WalletState::is_connected),
            is_drawer_open: ctx.drawer.get_untracked().is_open(),
        };
        let action = on_icon_click(state, &NavbarEffects(ctx));
        log::info(&format!("brand icon: {:?}", action));
    };

    let boxed_pools_tab = ctx.tabs.with_value(|tabs| tabs.pools.clone());

    view! {
        <Show when=move || blur.get()>
            <Blur />
        </Show>
        <nav class=move || nav_class.get()>
            <div class=css::bar>
                <div class=css::leftSideContainer>
                    <div class=css::logoContainer>
                        <button
                            class=move || logo_class.get()
                            title=APP_NAME
                            data-testid="uniswap-logo"
                            on:click=on_logo_click
                        >
                            <Icon icon=ic::BRAND />
                        </button>
                    </div>

                    <Show when=show_inline_selector>
                        <ChainSelector left_align=true />
                    </Show>

                    <Show when=show_page_tabs>
                        <div class=css::pageTabs>
                            <PageTabs show_pools=show_pools_in_row />
                        </div>
                    </Show>

                    <Show when=show_pools_boxed>
                        <div class=css::boxedTab>
                            <MenuItem tab=boxed_pools_tab.clone() />
                        </div>
                    </Show>
                </div>

                <div class=css::rightSideContainer>
                    <div class=css::row>
                        <Show when=show_right_selector>
                            <ChainSelector />
                        </Show>
                        <Web3Status />
                    </div>
                </div>
            </div>
        </nav>
    }
}
