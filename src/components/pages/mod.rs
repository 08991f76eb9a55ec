//! Page placeholders rendered below the navigation bar.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::NavTabs;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Heading shown for `route`.
pub fn page_title(route: &AppRoute, tabs: &NavTabs) -> &'static str {
    if route.is_landing_page() {
        "Home"
    } else if route.is_nft_page() {
        "NFTs"
    } else if tabs.swap.is_active(&route.path) {
        tabs.swap.label()
    } else if tabs.pools.is_active(&route.path) {
        tabs.pools.label()
    } else {
        "Page not found"
    }
}

/// Page body for the current route.
///
/// The landing page shows onboarding copy when reached with the intro
/// marker (`?intro=true`).
#[component]
pub fn Page(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let title = Signal::derive(move || route.with(|r| ctx.tabs.with_value(|tabs| page_title(r, tabs))));
    let is_intro = Signal::derive(move || route.with(AppRoute::is_intro));

    view! {
        <main class=css::page>
            <h1 class=css::title>{title}</h1>
            <Show when=move || is_intro.get()>
                <p class=css::intro data-testid="landing-intro">
                    "Buy, sell and explore tokens on the leading decentralized exchange."
                </p>
            </Show>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(hash: &str) -> &'static str {
        page_title(&AppRoute::from_hash(hash), &NavTabs::standard().unwrap())
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(title("#/"), "Home");
        assert_eq!(title("#/?intro=true"), "Home");
        assert_eq!(title("#/swap"), "Swap");
        assert_eq!(title("#/pools/v2"), "Pools");
        assert_eq!(title("#/add/ETH"), "Pools");
        assert_eq!(title("#/nfts/profile"), "NFTs");
        assert_eq!(title("#/tokens"), "Page not found");
    }
}
