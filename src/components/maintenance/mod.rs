//! Full-screen notice shown while the site is in maintenance mode.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/maintenance/maintenance.module.css");

#[component]
pub fn MaintenanceScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let closed = move || ctx.maintenance.with(|m| m.is_closed());

    view! {
        <Show when=closed>
            <div class=css::backdrop role="dialog" aria-modal="true">
                <div class=css::card>
                    <span class=css::icon><Icon icon=ic::MAINTENANCE /></span>
                    <h2>"Site em manutenção"</h2>
                    <p>"Estamos fazendo melhorias. Volte em alguns instantes."</p>
                </div>
            </div>
        </Show>
    }
}
