//! Page footer with the copyright line.
//!
//! The year is re-read every hour and whenever the tab becomes visible, so a
//! page left open over New Year picks up the new range.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::config::{AUTHOR, BASE_YEAR, YEAR_CHECK_INTERVAL_MS};
use crate::utils::dom;
use crate::utils::format::{copyright_years, current_year};

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

/// Store the current year in `year` if it changed.
fn refresh_year(year: RwSignal<i32>) {
    let now = current_year();
    if year.try_get_untracked().is_some_and(|shown| shown != now) {
        year.set(now);
    }
}

/// Keep `year` current on an hourly timer and on `visibilitychange`.
fn watch_year(year: RwSignal<i32>) {
    spawn_local(async move {
        loop {
            TimeoutFuture::new(YEAR_CHECK_INTERVAL_MS).await;
            refresh_year(year);
        }
    });

    let Some(document) = dom::window().and_then(|w| w.document()) else {
        return;
    };
    let on_visible = Closure::wrap(Box::new(move || {
        let visible = dom::window()
            .and_then(|w| w.document())
            .is_some_and(|d| !d.hidden());
        if visible {
            refresh_year(year);
        }
    }) as Box<dyn Fn()>);
    let _ = document
        .add_event_listener_with_callback("visibilitychange", on_visible.as_ref().unchecked_ref());
    on_visible.forget();
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = RwSignal::new(current_year());
    watch_year(year);

    view! {
        <footer class=css::footer>
            <p>
                "© "
                <span id="copyright-year">{move || copyright_years(BASE_YEAR, year.get())}</span>
                {format!(" {}. Todos os direitos reservados.", AUTHOR)}
            </p>
        </footer>
    }
}
