//! Browser implementation of [`MenuView`].

use leptos::html;
use leptos::prelude::*;

use crate::config::{FOCUSABLE_SELECTOR, MENU_OPEN_BODY_CLASS};
use crate::core::MenuView;
use crate::models::MenuState;
use crate::utils::dom;

/// Renders menu state through a signal and reads focus from the panel node.
#[derive(Clone, Copy)]
pub struct DomMenuView {
    pub state: RwSignal<MenuState>,
    pub panel: NodeRef<html::Ul>,
}

impl DomMenuView {
    pub fn new(panel: NodeRef<html::Ul>) -> Self {
        Self {
            state: RwSignal::new(MenuState::Closed),
            panel,
        }
    }

    fn focusables(&self) -> Vec<web_sys::HtmlElement> {
        match self.panel.get_untracked() {
            Some(panel) => dom::focusable_elements(&panel, FOCUSABLE_SELECTOR),
            None => {
                dom::warn("navigation panel not mounted");
                Vec::new()
            }
        }
    }
}

impl MenuView for DomMenuView {
    fn render(&self, state: MenuState) {
        // The reactive class lands after this tick; the panel must be visible
        // before `focus` runs.
        if let Some(panel) = self.panel.get_untracked() {
            let _ = panel
                .class_list()
                .toggle_with_force(super::css::linksActive, state.is_open());
        }
        self.state.set(state);
    }

    fn set_scroll_locked(&self, locked: bool) {
        dom::set_body_class(MENU_OPEN_BODY_CLASS, locked);
    }

    fn focusable_count(&self) -> usize {
        self.focusables().len()
    }

    fn focused_index(&self) -> Option<usize> {
        let active = dom::active_element()?;
        self.focusables()
            .iter()
            .position(|el| el.is_same_node(Some(&*active)))
    }

    fn focus(&self, index: usize) {
        if let Some(el) = self.focusables().get(index) {
            let _ = el.focus();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::super::css;

    #[wasm_bindgen_test]
    fn test_render_applies_active_class_before_focus() {
        let container = dom::window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("div").ok())
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        dom::body().unwrap().append_child(&container).unwrap();

        let owner = Owner::new();
        owner.with(|| {
            let panel = NodeRef::<html::Ul>::new();
            let menu_view = DomMenuView::new(panel);
            let _mounted = leptos::mount::mount_to(container.clone(), move || {
                view! {
                    <ul node_ref=panel class=css::links>
                        <li><a href="#home">"Início"</a></li>
                        <li><a href="#contact">"Contato"</a></li>
                    </ul>
                }
            });

            let ul = panel.get_untracked().unwrap();
            assert!(!ul.class_list().contains(css::linksActive));

            menu_view.render(MenuState::Open);
            assert!(ul.class_list().contains(css::linksActive));
            assert_eq!(menu_view.focusable_count(), 2);
            menu_view.focus(0);
            assert_eq!(menu_view.focused_index(), Some(0));

            menu_view.render(MenuState::Closed);
            assert!(!ul.class_list().contains(css::linksActive));
        });
        container.remove();
    }
}
