//! Application router component.
//!
//! Handles URL-based routing with hash history for IPFS compatibility.
//! Uses native hashchange/popstate events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: `AppContext::route` mirrors `#/path?query`
//! - **Navbar never re-renders on navigation**: it is always mounted and reacts to the signal
//! - **Back/forward**: popstate re-reads the hash

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::drawer::AccountDrawer;
use crate::components::navbar::Navbar;
use crate::components::pages::Page;
#[cfg(target_arch = "wasm32")]
use crate::models::AppRoute;

/// Main application router.
///
/// Route structure:
/// - `#/` → Landing (`#/?intro=true` shows onboarding)
/// - `#/swap` → Swap
/// - `#/pools/v2`, `#/pool`, `#/add/...` → Pools
/// - `#/nfts/...` → NFTs
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Runs once on mount; the listener lives for the whole page
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            for event in ["hashchange", "popstate"] {
                let _ = window
                    .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
        }

        closure.forget();
    }

    let route = Memo::new(move |_| ctx.route.get());
    let blur = Signal::derive(move || ctx.drawer.get().is_open());

    view! {
        <Navbar blur=blur />
        <Page route=route />
        <AccountDrawer />
    }
}
