//! Toast notifications.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Notification, NotificationKind};

stylance::import_crate_style!(css, "src/components/toast/toast.module.css");

/// Stack of active toasts, newest at the bottom.
#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let notifications = ctx.notifications;

    view! {
        <div class=css::stack aria-live="polite">
            <For
                each=move || notifications.items.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    let (kind_class, icon) = match n.kind {
                        NotificationKind::Success => (css::success, ic::SUCCESS),
                        NotificationKind::Error => (css::failure, ic::ERROR),
                    };
                    view! {
                        <div class=format!("{} {}", css::toast, kind_class) role="status">
                            <span class=css::icon><Icon icon=icon /></span>
                            <span class=css::message>{n.message}</span>
                            <button
                                type="button"
                                class=css::dismiss
                                aria-label="Fechar notificação"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
