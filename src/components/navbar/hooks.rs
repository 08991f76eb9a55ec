//! Reactive inputs for the navigation bar.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::config::breakpoints::{EXTRA_LARGE_MIN_PX, LARGE_MIN_PX};
use crate::core::{Breakpoint, Widget, WidgetGroup, is_visible};
use crate::models::AppRoute;

/// Current viewport [`Breakpoint`], tracked with `min-width` media queries.
pub fn use_breakpoint() -> Signal<Breakpoint> {
    let is_large = use_media_query(format!("(min-width: {}px)", LARGE_MIN_PX));
    let is_extra_large = use_media_query(format!("(min-width: {}px)", EXTRA_LARGE_MIN_PX));

    Signal::derive(move || Breakpoint::from_media(is_large.get(), is_extra_large.get()))
}

/// Which optional parts of the bar are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarLayout {
    pub inline_selector: bool,
    pub right_selector: bool,
    pub page_tabs: bool,
    pub pools_in_row: bool,
    pub pools_boxed: bool,
}

impl NavbarLayout {
    /// Resolves each widget group to its presentation at `breakpoint`.
    ///
    /// The inline chain selector is suppressed on NFT pages. The in-row
    /// Pools tab is only drawn while the page tabs row itself is drawn.
    pub fn resolve(breakpoint: Breakpoint, route: &AppRoute) -> Self {
        let chain_selector = WidgetGroup::ChainSelector.visible_presentation(breakpoint);
        let pools_tab = WidgetGroup::PoolsTab.visible_presentation(breakpoint);
        let page_tabs = is_visible(Widget::PageTabsRow, breakpoint);

        Self {
            inline_selector: chain_selector == Some(Widget::ChainSelectorInline)
                && !route.is_nft_page(),
            right_selector: chain_selector == Some(Widget::ChainSelectorRightSide),
            page_tabs,
            pools_in_row: page_tabs && pools_tab == Some(Widget::PoolsTabInRow),
            pools_boxed: pools_tab == Some(Widget::PoolsTabBoxed),
        }
    }
}

/// [`NavbarLayout`] for the current breakpoint and route.
pub fn use_navbar_layout(
    breakpoint: Signal<Breakpoint>,
    route: RwSignal<AppRoute>,
) -> Memo<NavbarLayout> {
    Memo::new(move |_| route.with(|route| NavbarLayout::resolve(breakpoint.get(), route)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pools_tab_count(layout: &NavbarLayout) -> usize {
        usize::from(layout.pools_in_row) + usize::from(layout.pools_boxed)
    }

    fn routes() -> [AppRoute; 3] {
        [
            AppRoute::from_hash("#/swap"),
            AppRoute::from_hash("#/pools/v2"),
            AppRoute::from_hash("#/nfts/collection/0xabc"),
        ]
    }

    #[test]
    fn test_one_chain_selector_off_nft_pages() {
        for bp in Breakpoint::ALL {
            let layout = NavbarLayout::resolve(bp, &AppRoute::from_hash("#/swap"));
            assert_ne!(layout.inline_selector, layout.right_selector, "{bp:?}");
        }
    }

    #[test]
    fn test_nft_page_hides_inline_selector() {
        let nft = AppRoute::from_hash("#/nfts");
        for bp in Breakpoint::ALL {
            let layout = NavbarLayout::resolve(bp, &nft);
            assert!(!layout.inline_selector, "{bp:?}");
            assert_eq!(layout.right_selector, bp == Breakpoint::Large);
        }
    }

    #[test]
    fn test_pools_tab_drawn_once() {
        for route in routes() {
            for bp in Breakpoint::ALL {
                let layout = NavbarLayout::resolve(bp, &route);
                assert_eq!(pools_tab_count(&layout), 1, "{bp:?} {}", route.path);
            }
        }
    }

    #[test]
    fn test_in_row_pools_needs_row() {
        for route in routes() {
            for bp in Breakpoint::ALL {
                let layout = NavbarLayout::resolve(bp, &route);
                if layout.pools_in_row {
                    assert!(layout.page_tabs, "{bp:?}");
                }
            }
        }
    }

    #[test]
    fn test_swap_precedes_pools() {
        // Swap lives in the row; Pools is either inside it or boxed after it
        for bp in [Breakpoint::Large, Breakpoint::ExtraLarge] {
            let layout = NavbarLayout::resolve(bp, &AppRoute::from_hash("#/"));
            assert!(layout.page_tabs);
            assert_eq!(pools_tab_count(&layout), 1);
        }
        let small = NavbarLayout::resolve(Breakpoint::Small, &AppRoute::from_hash("#/"));
        assert!(!small.page_tabs);
        assert!(small.pools_boxed);
    }

    #[test]
    fn test_route_does_not_move_tabs() {
        for bp in Breakpoint::ALL {
            let home = NavbarLayout::resolve(bp, &AppRoute::from_hash("#/"));
            let nft = NavbarLayout::resolve(bp, &AppRoute::from_hash("#/nfts"));
            assert_eq!(home.page_tabs, nft.page_tabs);
            assert_eq!(home.pools_in_row, nft.pools_in_row);
            assert_eq!(home.pools_boxed, nft.pools_boxed);
        }
    }
}
