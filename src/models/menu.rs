//! Mobile navigation menu state.

/// Open/closed state of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    /// Panel hidden (default)
    #[default]
    Closed,
    /// Panel and overlay visible
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Value for the trigger button's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        match self {
            MenuState::Closed => "false",
            MenuState::Open => "true",
        }
    }

    /// Accessible label for the trigger button.
    pub fn trigger_label(self) -> &'static str {
        match self {
            MenuState::Closed => "Abrir menu",
            MenuState::Open => "Fechar menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_aria_expanded() {
        assert_eq!(MenuState::Closed.aria_expanded(), "false");
        assert_eq!(MenuState::Open.aria_expanded(), "true");
    }
}
