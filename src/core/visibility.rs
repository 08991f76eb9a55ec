//! Responsive widget visibility.
//!
//! The navigation bar draws some widgets through one of two alternative
//! presentations depending on viewport width. [`is_visible`] is the single
//! source of truth for which one is drawn.
//!
//! | Widget | Small | Large | ExtraLarge |
//! |--------|-------|-------|------------|
//! | `ChainSelectorInline` | yes | no | yes |
//! | `ChainSelectorRightSide` | no | yes | no |
//! | `PoolsTabBoxed` | yes | no | yes |
//! | `PoolsTabInRow` | no | yes | no |
//! | `PageTabsRow` | no | yes | yes |

/// Named viewport width tier, ordered by width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// Narrow viewports (phones, small tablets)
    #[default]
    Small,
    /// Wide viewports
    Large,
    /// Extra-wide viewports
    ExtraLarge,
}

impl Breakpoint {
    #[cfg(test)]
    pub const ALL: [Breakpoint; 3] = [Self::Small, Self::Large, Self::ExtraLarge];

    /// Classifies from the results of the `min-width` media queries for
    /// `config::breakpoints::LARGE_MIN_PX` and `EXTRA_LARGE_MIN_PX`.
    pub fn from_media(is_large: bool, is_extra_large: bool) -> Self {
        match (is_large, is_extra_large) {
            (_, true) => Self::ExtraLarge,
            (true, false) => Self::Large,
            (false, false) => Self::Small,
        }
    }
}

/// A conditionally drawn part of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Widget {
    /// Chain selector next to the brand icon
    ChainSelectorInline,
    /// Chain selector next to the wallet status
    ChainSelectorRightSide,
    /// Pools tab rendered on its own in the left container
    PoolsTabBoxed,
    /// Pools tab rendered inside the page tabs row
    PoolsTabInRow,
    /// Row of page tabs (Swap and, when wide enough, Pools)
    PageTabsRow,
}

impl Widget {
    #[cfg(test)]
    pub const ALL: [Widget; 5] = [
        Self::ChainSelectorInline,
        Self::ChainSelectorRightSide,
        Self::PoolsTabBoxed,
        Self::PoolsTabInRow,
        Self::PageTabsRow,
    ];
}

/// Returns whether `widget` is drawn at `breakpoint`.
///
/// Every pair is listed explicitly; adding a widget or breakpoint fails to
/// compile until its row is filled in.
pub fn is_visible(widget: Widget, breakpoint: Breakpoint) -> bool {
    use Breakpoint::*;
    use Widget::*;

    match (widget, breakpoint) {
        (ChainSelectorInline, Small) => true,
        (ChainSelectorInline, Large) => false,
        (ChainSelectorInline, ExtraLarge) => true,

        (ChainSelectorRightSide, Small) => false,
        (ChainSelectorRightSide, Large) => true,
        (ChainSelectorRightSide, ExtraLarge) => false,

        (PoolsTabBoxed, Small) => true,
        (PoolsTabBoxed, Large) => false,
        (PoolsTabBoxed, ExtraLarge) => true,

        (PoolsTabInRow, Small) => false,
        (PoolsTabInRow, Large) => true,
        (PoolsTabInRow, ExtraLarge) => false,

        (PageTabsRow, Small) => false,
        (PageTabsRow, Large) => true,
        (PageTabsRow, ExtraLarge) => true,
    }
}

/// A logical widget drawn through exactly one of two presentations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetGroup {
    ChainSelector,
    PoolsTab,
}

impl WidgetGroup {
    #[cfg(test)]
    pub const ALL: [WidgetGroup; 2] = [Self::ChainSelector, Self::PoolsTab];

    /// The alternative presentations of this group.
    pub fn presentations(self) -> [Widget; 2] {
        match self {
            Self::ChainSelector => [Widget::ChainSelectorInline, Widget::ChainSelectorRightSide],
            Self::PoolsTab => [Widget::PoolsTabBoxed, Widget::PoolsTabInRow],
        }
    }

    /// The presentation drawn at `breakpoint`, if exactly one is visible.
    pub fn visible_presentation(self, breakpoint: Breakpoint) -> Option<Widget> {
        match self
            .presentations()
            .map(|widget| (widget, is_visible(widget, breakpoint)))
        {
            [(widget, true), (_, false)] | [(_, false), (widget, true)] => Some(widget),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_render_exactly_once() {
        for group in WidgetGroup::ALL {
            for bp in Breakpoint::ALL {
                let visible = group
                    .presentations()
                    .iter()
                    .filter(|w| is_visible(**w, bp))
                    .count();
                assert_eq!(visible, 1, "{group:?} at {bp:?}");
                assert!(group.visible_presentation(bp).is_some());
            }
        }
    }

    #[test]
    fn test_chain_selector_placement() {
        use Breakpoint::*;
        assert_eq!(
            WidgetGroup::ChainSelector.visible_presentation(Small),
            Some(Widget::ChainSelectorInline)
        );
        assert_eq!(
            WidgetGroup::ChainSelector.visible_presentation(Large),
            Some(Widget::ChainSelectorRightSide)
        );
        assert_eq!(
            WidgetGroup::ChainSelector.visible_presentation(ExtraLarge),
            Some(Widget::ChainSelectorInline)
        );
    }

    #[test]
    fn test_pools_tab_placement() {
        use Breakpoint::*;
        assert!(is_visible(Widget::PoolsTabBoxed, Small));
        assert!(!is_visible(Widget::PoolsTabBoxed, Large));
        assert!(is_visible(Widget::PoolsTabBoxed, ExtraLarge));
        assert_eq!(
            WidgetGroup::PoolsTab.visible_presentation(Large),
            Some(Widget::PoolsTabInRow)
        );
    }

    #[test]
    fn test_page_tabs_row_from_large_up() {
        for bp in Breakpoint::ALL {
            assert_eq!(is_visible(Widget::PageTabsRow, bp), bp >= Breakpoint::Large);
        }
    }

    #[test]
    fn test_in_row_presentation_requires_row() {
        for bp in Breakpoint::ALL {
            if is_visible(Widget::PoolsTabInRow, bp) {
                assert!(is_visible(Widget::PageTabsRow, bp));
            }
        }
    }

    #[test]
    fn test_table_is_deterministic() {
        for widget in Widget::ALL {
            for bp in Breakpoint::ALL {
                assert_eq!(is_visible(widget, bp), is_visible(widget, bp));
            }
        }
    }

    #[test]
    fn test_from_media() {
        assert_eq!(Breakpoint::from_media(false, false), Breakpoint::Small);
        assert_eq!(Breakpoint::from_media(true, false), Breakpoint::Large);
        assert_eq!(Breakpoint::from_media(true, true), Breakpoint::ExtraLarge);
        // Mid-resize both queries may not have settled
        assert_eq!(Breakpoint::from_media(false, true), Breakpoint::ExtraLarge);
    }

    #[test]
    fn test_breakpoint_ordering() {
        assert!(Breakpoint::Small < Breakpoint::Large);
        assert!(Breakpoint::Large < Breakpoint::ExtraLarge);
    }
}
