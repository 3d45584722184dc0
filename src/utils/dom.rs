//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Every helper degrades to a no-op when the element or API is missing.

use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Storage,
    Window,
};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get the document body.
pub fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = body() else {
        warn("body element not found");
        return;
    };
    let classes = body.class_list();
    let _ = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

/// Evaluate a media query right now with `matchMedia`.
///
/// `false` when the API is missing or the query does not parse.
pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|list| list.matches())
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

/// Focusable descendants of `root` matching `selector`, in document order.
pub fn focusable_elements(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// The element that currently has keyboard focus.
pub fn active_element() -> Option<Element> {
    window()?.document()?.active_element()
}

/// Smoothly scroll to the element referenced by an in-page anchor (`#id`).
///
/// Returns `true` if the target exists.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return false;
    };
    let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(html: &str) -> Element {
        let document = window().and_then(|w| w.document()).unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(html);
        body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    fn test_set_body_class_toggles() {
        set_body_class("test-flag", true);
        assert!(body().unwrap().class_list().contains("test-flag"));
        set_body_class("test-flag", false);
        assert!(!body().unwrap().class_list().contains("test-flag"));
    }

    #[wasm_bindgen_test]
    fn test_focusable_elements_in_document_order() {
        let root = mount(
            r##"<button id="a">a</button><span>x</span><a id="b" href="#home">b</a>"##,
        );
        let found = focusable_elements(&root, crate::config::FOCUSABLE_SELECTOR);
        let ids: Vec<String> = found.iter().map(|el| el.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_media_matches_is_synchronous() {
        assert!(media_matches("(min-width: 0px)"));
        assert!(!media_matches("(max-width: 0px)"));
        assert!(!media_matches("not a valid ((query"));
    }

    #[wasm_bindgen_test]
    fn test_scroll_to_missing_anchor() {
        assert!(!scroll_to_anchor("#does-not-exist"));
        assert!(!scroll_to_anchor("#"));
        assert!(!scroll_to_anchor("contact"));
    }

    #[wasm_bindgen_test]
    fn test_scroll_to_existing_anchor() {
        let root = mount(r#"<section id="scroll-target"></section>"#);
        assert!(scroll_to_anchor("#scroll-target"));
        root.remove();
    }
}
