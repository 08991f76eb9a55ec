//! Brand icon click handling.
//!
//! Clicking the brand icon while disconnected closes the account drawer
//! (if open) and then navigates to the landing page with the intro marker.
//! While a wallet is connected the icon is inert.

use crate::models::NavigationIntent;

/// Externally owned state read at click time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IconClickState {
    pub is_wallet_connected: bool,
    pub is_drawer_open: bool,
}

/// Side effects a click may trigger. Both are fire-and-forget.
pub trait IconClickEffects {
    fn close_drawer(&self);
    fn navigate_home(&self, intent: &NavigationIntent);
}

/// What a brand icon click does for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconClickAction {
    Ignored,
    NavigateHome,
    CloseDrawerThenNavigateHome,
}

impl IconClickAction {
    pub fn decide(state: IconClickState) -> Self {
        if state.is_wallet_connected {
            Self::Ignored
        } else if state.is_drawer_open {
            Self::CloseDrawerThenNavigateHome
        } else {
            Self::NavigateHome
        }
    }
}

/// Runs the click sequence and reports which action was taken.
///
/// `close_drawer` returns before `navigate_home` is called.
pub fn on_icon_click(state: IconClickState, effects: &impl IconClickEffects) -> IconClickAction {
    let action = IconClickAction::decide(state);
    match action {
        IconClickAction::Ignored => return action,
        IconClickAction::CloseDrawerThenNavigateHome => effects.close_drawer(),
        IconClickAction::NavigateHome => {}
    }
    effects.navigate_home(&NavigationIntent::intro_home());
    action
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        CloseDrawer,
        NavigateHome(NavigationIntent),
    }

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<Call>>,
    }

    impl IconClickEffects for Recorder {
        fn close_drawer(&self) {
            self.calls.borrow_mut().push(Call::CloseDrawer);
        }

        fn navigate_home(&self, intent: &NavigationIntent) {
            self.calls.borrow_mut().push(Call::NavigateHome(intent.clone()));
        }
    }

    fn click(is_wallet_connected: bool, is_drawer_open: bool) -> (IconClickAction, Vec<Call>) {
        let recorder = Recorder::default();
        let action = on_icon_click(
            IconClickState {
                is_wallet_connected,
                is_drawer_open,
            },
            &recorder,
        );
        (action, recorder.calls.into_inner())
    }

    #[test]
    fn test_connected_is_inert() {
        for drawer_open in [false, true] {
            let (action, calls) = click(true, drawer_open);
            assert_eq!(action, IconClickAction::Ignored);
            assert!(calls.is_empty());
        }
    }

    #[test]
    fn test_open_drawer_closes_before_navigating() {
        let (action, calls) = click(false, true);
        assert_eq!(action, IconClickAction::CloseDrawerThenNavigateHome);
        assert_eq!(
            calls,
            vec![
                Call::CloseDrawer,
                Call::NavigateHome(NavigationIntent::intro_home())
            ]
        );
    }

    #[test]
    fn test_closed_drawer_only_navigates() {
        let (action, calls) = click(false, false);
        assert_eq!(action, IconClickAction::NavigateHome);
        assert_eq!(calls, vec![Call::NavigateHome(NavigationIntent::intro_home())]);
    }

    #[test]
    fn test_navigation_always_carries_intro_marker() {
        for drawer_open in [false, true] {
            let (_, calls) = click(false, drawer_open);
            let Some(Call::NavigateHome(intent)) = calls.last() else {
                panic!("expected navigation");
            };
            assert_eq!(intent.pathname, "/");
            assert_eq!(intent.search, "?intro=true");
        }
    }

    #[test]
    fn test_repeated_clicks_reevaluate() {
        let recorder = Recorder::default();
        let state = IconClickState {
            is_wallet_connected: false,
            is_drawer_open: false,
        };
        on_icon_click(state, &recorder);
        on_icon_click(state, &recorder);
        assert_eq!(recorder.calls.borrow().len(), 2);
    }
}
