//! Light/dark theme toggle button.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

use super::css;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let theme = ctx.theme;

    view! {
        <button
            type="button"
            class=css::themeToggle
            title=move || theme.get().toggle_title()
            aria-label=move || theme.get().toggle_title()
            on:click=move |_| ctx.toggle_theme()
        >
            {move || if theme.get().is_dark() {
                view! { <Icon icon=ic::SUN /> }.into_any()
            } else {
                view! { <Icon icon=ic::MOON /> }.into_any()
            }}
        </button>
    }
}
