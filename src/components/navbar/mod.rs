//! Navigation bar with the mobile menu.
//!
//! Desktop widths show the links inline. Below the breakpoint the links move
//! into a slide-in panel driven by [`MenuController`].

mod theme_toggle;
mod view;

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{LOGO_TEXT, NAV_LINKS};
use crate::core::{MenuController, MenuKey};
use crate::utils::dom;

pub use theme_toggle::ThemeToggle;
pub use view::DomMenuView;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Id of the panel, referenced by the trigger's `aria-controls`.
const PANEL_ID: &str = "primary-navigation";

/// Register window-level keydown and resize listeners for the menu.
///
/// # Note
/// The closures are intentionally leaked using `forget()`: the navbar lives
/// for the whole page lifetime.
fn bind_window_listeners(menu: StoredValue<MenuController<DomMenuView>, LocalStorage>) {
    let Some(window) = dom::window() else {
        dom::warn("window not available; menu keyboard handling disabled");
        return;
    };

    let on_keydown = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
        let key = MenuKey::from_key(&ev.key(), ev.shift_key());
        if menu.try_with_value(|m| m.handle_key(key)) == Some(true) {
            ev.prevent_default();
        }
    }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

    let on_resize = Closure::wrap(Box::new(move || {
        if let Some(width) = dom::viewport_width() {
            menu.try_with_value(|m| m.handle_resize(width));
        }
    }) as Box<dyn Fn()>);

    let _ = window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

    on_keydown.forget();
    on_resize.forget();
}

/// Top navigation bar: logo, links panel, theme toggle and menu trigger.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let panel_ref = NodeRef::<html::Ul>::new();
    let view = DomMenuView::new(panel_ref);
    let state = view.state;
    let menu = StoredValue::new_local(MenuController::new(view));

    bind_window_listeners(menu);

    let panel_class = move || {
        if state.get().is_open() {
            format!("{} {}", css::links, css::linksActive)
        } else {
            css::links.to_string()
        }
    };

    let overlay_class = move || {
        if state.get().is_open() {
            format!("{} {}", css::overlay, css::overlayActive)
        } else {
            css::overlay.to_string()
        }
    };

    let logo_class = move || match ctx.logo_font.get() {
        Some(font) => format!("{} {}", css::logo, font),
        None => css::logo.to_string(),
    };

    let follow_link = move |ev: leptos::ev::MouseEvent, href: &'static str| {
        if dom::scroll_to_anchor(href) {
            ev.prevent_default();
        }
        menu.with_value(|m| m.handle_link_click());
    };

    let links = NAV_LINKS
        .iter()
        .map(|&(label, href)| {
            view! {
                <li>
                    <a href=href class=css::link on:click=move |ev| follow_link(ev, href)>
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class=css::nav>
            <a href="#home" class=logo_class on:click=move |ev| follow_link(ev, "#home")>
                {LOGO_TEXT}
            </a>

            <ul node_ref=panel_ref id=PANEL_ID class=panel_class>
                <li class=css::closeItem>
                    <button
                        type="button"
                        class=css::closeButton
                        aria-label="Fechar menu"
                        on:click=move |_| menu.with_value(|m| m.close())
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </li>
                {links}
            </ul>

            <div class=css::actions>
                <ThemeToggle />
                <button
                    type="button"
                    class=css::menuButton
                    aria-controls=PANEL_ID
                    aria-expanded=move || state.get().aria_expanded()
                    aria-label=move || state.get().trigger_label()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        menu.with_value(|m| m.handle_trigger_click());
                    }
                >
                    {move || if state.get().is_open() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }}
                </button>
            </div>
        </nav>

        <div
            class=overlay_class
            aria-hidden="true"
            on:click=move |_| menu.with_value(|m| m.handle_overlay_click())
        ></div>
    }
}
