//! Root application module.
//!
//! Contains the main App component, the AppContext definition and
//! application-level setup (wallet session restore, provider events).

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::{APP_NAME, APP_VERSION, FeatureFlags};
use crate::core::{NavTabs, chain_id_to_backend_name, wallet};
use crate::models::{AppRoute, DrawerState, NavigationIntent, WalletState};
use crate::utils::{dom, log};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`. The navigation bar only reads these
/// stores; the router, wallet bridge and drawer own their updates.
///
/// # Note
///
/// This struct is `Copy` because all fields are signals, stored values or
/// plain flags.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route, derived from the URL hash.
    pub route: RwSignal<AppRoute>,

    /// Wallet connection state.
    pub wallet: RwSignal<WalletState>,

    /// Account drawer visibility.
    pub drawer: RwSignal<DrawerState>,

    /// Primary page tabs.
    pub tabs: StoredValue<NavTabs>,

    /// Startup feature flags.
    pub flags: FeatureFlags,
}

impl AppContext {
    pub fn new(tabs: NavTabs, flags: FeatureFlags) -> Self {
        Self {
            route: RwSignal::new(AppRoute::current()),
            wallet: RwSignal::new(WalletState::default()),
            drawer: RwSignal::new(DrawerState::default()),
            tabs: StoredValue::new(tabs),
            flags,
        }
    }

    /// Push `intent` onto browser history and update the route signal.
    pub fn navigate(&self, intent: &NavigationIntent) {
        let route = intent.to_route();
        log::info(&format!("navigate: {}", route.to_hash()));
        route.push();
        self.route.set(route);
    }

    /// Forget the connected account locally and close the drawer.
    pub fn disconnect(&self) {
        wallet::clear_session();
        self.wallet.set(WalletState::Disconnected);
        self.drawer.update(DrawerState::close);
    }
}

// ============================================================================
// Wallet Setup
// ============================================================================

/// Keep wallet state in sync with provider account and chain events.
fn setup_wallet_events(ctx: AppContext) {
    let accounts = wallet::on_accounts_changed(move |account: Option<String>| match account {
        Some(address) => {
            let was_connected = ctx.wallet.with_untracked(WalletState::is_connected);
            ctx.wallet.update(|w| *w = w.with_account(address));
            if !was_connected {
                wallet::save_session();
                refresh_chain_id(ctx);
            }
        }
        None => ctx.disconnect(),
    });

    let chain = wallet::on_chain_changed(move |new_chain_id: Option<u64>| {
        log::info(&format!(
            "chain changed: {}",
            chain_id_to_backend_name(new_chain_id)
        ));
        ctx.wallet.update(|w| {
            if let WalletState::Connected { chain_id, .. } = w {
                *chain_id = new_chain_id;
            }
        });
    });

    if let Err(e) = accounts.and(chain) {
        log::warn(&format!("wallet events unavailable: {}", e));
    }
}

/// Query the provider's chain for an account connected outside the bar.
fn refresh_chain_id(ctx: AppContext) {
    wasm_bindgen_futures::spawn_local(async move {
        let new_chain_id = wallet::get_chain_id().await;
        ctx.wallet.update(|w| {
            if let WalletState::Connected { chain_id, .. } = w {
                *chain_id = new_chain_id;
            }
        });
    });
}

/// Reconnect silently when a previous session exists.
fn restore_session(ctx: AppContext) {
    if !wallet::has_session() {
        return;
    }
    ctx.wallet.set(WalletState::Connecting);
    wasm_bindgen_futures::spawn_local(async move {
        match wallet::get_account().await {
            Some(address) => {
                let chain_id = wallet::get_chain_id().await;
                ctx.wallet.set(WalletState::Connected { address, chain_id });
            }
            None => {
                wallet::clear_session();
                ctx.wallet.set(WalletState::Disconnected);
            }
        }
    });
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// Builds the tab configuration, provides the [`AppContext`] and renders
/// the router. Invalid tab configuration is reported through the
/// boundary's fallback.
#[component]
pub fn App() -> impl IntoView {
    dom::set_title(APP_NAME);
    log::info(&format!("{} navigation v{}", APP_NAME, APP_VERSION));

    let content = NavTabs::standard().map(|tabs| {
        let ctx = AppContext::new(tabs, FeatureFlags::default());
        provide_context(ctx);

        if wallet::is_available() {
            setup_wallet_events(ctx);
            restore_session(ctx);
        }

        view! { <AppRouter /> }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0d111c;
                    color: #e8ecfb;
                    font-family: Inter, sans-serif;
                ">
                    <h1 style="color: #fd4040; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #98a1c0; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #fc72ff;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 20px;
                            cursor: pointer;
                            font-size: 1rem;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            {content}
        </ErrorBoundary>
    }
}
