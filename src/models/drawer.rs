//! Account drawer open/closed state.

/// Account drawer visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mut drawer = DrawerState::default();
        assert!(!drawer.is_open());

        drawer.toggle();
        assert!(drawer.is_open());
        drawer.toggle();
        assert!(!drawer.is_open());

        drawer.toggle();
        assert!(drawer.is_open());
        drawer.close();
        drawer.close();
        assert_eq!(drawer, DrawerState::Closed);
    }
}
