//! Mobile navigation menu controller.
//!
//! The controller owns the [`MenuState`] and drives a [`MenuView`] that
//! renders it. The browser binding lives in `components::navbar`.

use std::cell::Cell;

use crate::config::MOBILE_BREAKPOINT_PX;
use crate::models::MenuState;

/// Rendering and focus operations the controller needs from the page.
///
/// Implementations must tolerate missing elements by doing nothing.
pub trait MenuView {
    /// Reflect `state` on the panel, overlay, trigger icon and `aria-expanded`.
    fn render(&self, state: MenuState);

    /// Enable or disable page scrolling behind the panel.
    fn set_scroll_locked(&self, locked: bool);

    /// Number of focusable elements inside the panel.
    fn focusable_count(&self) -> usize;

    /// Index of the focused element among the panel's focusable elements,
    /// or `None` when focus is outside the panel.
    fn focused_index(&self) -> Option<usize>;

    /// Move keyboard focus to the focusable element at `index`.
    fn focus(&self, index: usize);
}

/// Keyboard input relevant to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Escape,
    Tab { backwards: bool },
    Other,
}

impl MenuKey {
    /// Classify a `KeyboardEvent.key` value.
    pub fn from_key(key: &str, shift: bool) -> Self {
        match key {
            "Escape" | "Esc" => MenuKey::Escape,
            "Tab" => MenuKey::Tab { backwards: shift },
            _ => MenuKey::Other,
        }
    }
}

/// Next focus target for Tab inside a trapped panel of `len` elements.
///
/// Cycles with wrap-around; focus outside the panel re-enters at the first
/// element (or the last one when going backwards).
pub fn trap_focus(current: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match current {
        Some(i) if i < len => {
            if backwards {
                (i + len - 1) % len
            } else {
                (i + 1) % len
            }
        }
        _ if backwards => len - 1,
        _ => 0,
    };
    Some(next)
}

/// Open/closed state machine for the mobile navigation panel.
pub struct MenuController<V> {
    view: V,
    state: Cell<MenuState>,
    breakpoint: f64,
}

impl<V: MenuView> MenuController<V> {
    /// Creates a closed menu using the configured mobile breakpoint.
    pub fn new(view: V) -> Self {
        Self::with_breakpoint(view, MOBILE_BREAKPOINT_PX)
    }

    pub fn with_breakpoint(view: V, breakpoint: f64) -> Self {
        Self {
            view,
            state: Cell::new(MenuState::Closed),
            breakpoint,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn open(&self) {
        if self.state.get().is_open() {
            return;
        }
        self.state.set(MenuState::Open);
        self.view.render(MenuState::Open);
        self.view.set_scroll_locked(true);
        if self.view.focusable_count() > 0 {
            self.view.focus(0);
        }
    }

    pub fn close(&self) {
        if !self.state.get().is_open() {
            return;
        }
        self.state.set(MenuState::Closed);
        self.view.render(MenuState::Closed);
        self.view.set_scroll_locked(false);
    }

    pub fn toggle(&self) {
        match self.state.get() {
            MenuState::Closed => self.open(),
            MenuState::Open => self.close(),
        }
    }

    pub fn handle_trigger_click(&self) {
        self.toggle();
    }

    pub fn handle_overlay_click(&self) {
        self.close();
    }

    /// A navigation link was followed.
    pub fn handle_link_click(&self) {
        self.close();
    }

    /// Handle a keydown anywhere on the page.
    ///
    /// Returns `true` when the event was consumed and its default action
    /// must be prevented.
    pub fn handle_key(&self, key: MenuKey) -> bool {
        if !self.state.get().is_open() {
            return false;
        }
        match key {
            MenuKey::Escape => {
                self.close();
                true
            }
            MenuKey::Tab { backwards } => {
                let len = self.view.focusable_count();
                match trap_focus(self.view.focused_index(), len, backwards) {
                    Some(target) => {
                        self.view.focus(target);
                        true
                    }
                    None => false,
                }
            }
            MenuKey::Other => false,
        }
    }

    /// Close the panel once the viewport reaches desktop width.
    pub fn handle_resize(&self, viewport_width: f64) {
        if self.state.get().is_open() && viewport_width >= self.breakpoint {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct FakeView {
        rendered: RefCell<Vec<MenuState>>,
        scroll_locked: Cell<bool>,
        focusables: usize,
        focused: Cell<Option<usize>>,
    }

    impl FakeView {
        fn with_focusables(count: usize) -> Self {
            Self {
                focusables: count,
                ..Self::default()
            }
        }

        fn aria_expanded(&self) -> &'static str {
            self.rendered
                .borrow()
                .last()
                .copied()
                .unwrap_or_default()
                .aria_expanded()
        }
    }

    impl MenuView for FakeView {
        fn render(&self, state: MenuState) {
            self.rendered.borrow_mut().push(state);
        }

        fn set_scroll_locked(&self, locked: bool) {
            self.scroll_locked.set(locked);
        }

        fn focusable_count(&self) -> usize {
            self.focusables
        }

        fn focused_index(&self) -> Option<usize> {
            self.focused.get()
        }

        fn focus(&self, index: usize) {
            self.focused.set(Some(index));
        }
    }

    fn menu(focusables: usize) -> MenuController<FakeView> {
        MenuController::new(FakeView::with_focusables(focusables))
    }

    #[test]
    fn test_trap_focus_wraps() {
        assert_eq!(trap_focus(Some(0), 3, false), Some(1));
        assert_eq!(trap_focus(Some(2), 3, false), Some(0));
        assert_eq!(trap_focus(Some(0), 3, true), Some(2));
        assert_eq!(trap_focus(Some(1), 3, true), Some(0));
    }

    #[test]
    fn test_trap_focus_from_outside() {
        assert_eq!(trap_focus(None, 4, false), Some(0));
        assert_eq!(trap_focus(None, 4, true), Some(3));
        assert_eq!(trap_focus(Some(9), 4, false), Some(0));
        assert_eq!(trap_focus(None, 0, false), None);
    }

    #[test]
    fn test_single_focusable_stays_put() {
        assert_eq!(trap_focus(Some(0), 1, false), Some(0));
        assert_eq!(trap_focus(Some(0), 1, true), Some(0));
    }

    #[test]
    fn test_key_classification() {
        assert_eq!(MenuKey::from_key("Escape", false), MenuKey::Escape);
        assert_eq!(MenuKey::from_key("Tab", true), MenuKey::Tab { backwards: true });
        assert_eq!(MenuKey::from_key("Enter", false), MenuKey::Other);
    }

    #[test]
    fn test_open_locks_scroll_and_focuses_first() {
        let menu = menu(3);
        menu.open();
        assert_eq!(menu.state(), MenuState::Open);
        assert!(menu.view().scroll_locked.get());
        assert_eq!(menu.view().focused.get(), Some(0));
        assert_eq!(menu.view().aria_expanded(), "true");
    }

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let menu = menu(2);
        menu.toggle();
        menu.toggle();
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(menu.view().aria_expanded(), "false");
        assert!(!menu.view().scroll_locked.get());
        assert_eq!(
            *menu.view().rendered.borrow(),
            vec![MenuState::Open, MenuState::Closed]
        );
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let menu = menu(1);
        menu.close();
        assert!(menu.view().rendered.borrow().is_empty());
        menu.open();
        menu.open();
        assert_eq!(menu.view().rendered.borrow().len(), 1);
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let menu = menu(2);
        assert!(!menu.handle_key(MenuKey::Escape));
        assert_eq!(menu.state(), MenuState::Closed);

        menu.open();
        assert!(menu.handle_key(MenuKey::Escape));
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(menu.view().aria_expanded(), "false");
    }

    #[test]
    fn test_tab_cycles_inside_panel() {
        let menu = menu(3);
        menu.open();
        assert!(menu.handle_key(MenuKey::Tab { backwards: false }));
        assert_eq!(menu.view().focused.get(), Some(1));
        menu.handle_key(MenuKey::Tab { backwards: false });
        menu.handle_key(MenuKey::Tab { backwards: false });
        assert_eq!(menu.view().focused.get(), Some(0));
        menu.handle_key(MenuKey::Tab { backwards: true });
        assert_eq!(menu.view().focused.get(), Some(2));
    }

    #[test]
    fn test_tab_ignored_while_closed() {
        let menu = menu(3);
        assert!(!menu.handle_key(MenuKey::Tab { backwards: false }));
        assert_eq!(menu.view().focused.get(), None);
    }

    #[test]
    fn test_tab_with_empty_panel_not_consumed() {
        let menu = menu(0);
        menu.open();
        assert!(!menu.handle_key(MenuKey::Tab { backwards: false }));
    }

    #[test]
    fn test_resize_to_desktop_closes() {
        let menu = menu(1);
        menu.open();
        menu.handle_resize(500.0);
        assert_eq!(menu.state(), MenuState::Open);
        menu.handle_resize(MOBILE_BREAKPOINT_PX);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_overlay_and_link_clicks_close() {
        let menu = menu(1);
        menu.handle_trigger_click();
        menu.handle_overlay_click();
        assert_eq!(menu.state(), MenuState::Closed);

        menu.handle_trigger_click();
        menu.handle_link_click();
        assert_eq!(menu.state(), MenuState::Closed);
    }
}
