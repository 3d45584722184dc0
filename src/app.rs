//! Root application module.
//!
//! Contains the main App component, AppContext definition, NotificationState,
//! and application-level setup (theme, maintenance polling).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::components::{
    About, ContactSection, Footer, Hero, MaintenanceScreen, Navbar, Projects, Skills, Toasts,
};
use crate::config::{
    DARK_MODE_BODY_CLASS, NOTIFICATION_TIMEOUT_MS, PREFERS_DARK_QUERY, maintenance,
};
use crate::core::{maintenance as poller, theme};
use crate::models::{MaintenanceStatus, Notification, Theme};
use crate::utils::dom;

// ============================================================================
// NotificationState
// ============================================================================

/// Toast queue managed with Leptos signals.
///
/// Every pushed notification dismisses itself after
/// `NOTIFICATION_TIMEOUT_MS`, independent of anything else in flight.
#[derive(Clone, Copy)]
pub struct NotificationState {
    /// Visible toasts, oldest first.
    pub items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Show a toast and schedule its dismissal. Returns the assigned id.
    pub fn push(&self, mut notification: Notification) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        notification.id = id;
        self.items.update(|items| items.push(notification));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
            this.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        // The owner may already be gone when a timer fires late.
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and available to any child
/// via `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active color theme.
    pub theme: RwSignal<Theme>,

    /// Toast notifications.
    pub notifications: NotificationState,

    /// Last status fetched from the maintenance endpoint.
    pub maintenance: RwSignal<MaintenanceStatus>,

    /// Remotely selected logo font class (kept until another one arrives).
    pub logo_font: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: RwSignal::new(theme),
            notifications: NotificationState::new(),
            maintenance: RwSignal::new(MaintenanceStatus::default()),
            logo_font: RwSignal::new(None),
        }
    }

    /// Flip the theme and persist the choice.
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        if let Err(e) = theme::save(next) {
            dom::warn(&format!("theme not saved: {}", e));
        }
    }

    /// Apply a freshly polled maintenance status.
    pub fn apply_maintenance(&self, status: MaintenanceStatus) {
        if let Some(font) = status.logo_font_class() {
            self.logo_font.set(Some(font));
        }
        self.maintenance.set(status);
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Resolves the initial theme and provides the global AppContext
/// - Keeps `<body>` classes in sync with theme and maintenance state
/// - Starts the maintenance poller
/// - Renders the page inside an ErrorBoundary
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(theme::initial());
    provide_context(ctx);

    // Follow OS color-scheme changes until the user picks a theme.
    let prefers_dark = use_media_query(PREFERS_DARK_QUERY);
    Effect::watch(
        move || prefers_dark.get(),
        move |dark, _, _| {
            if theme::load().is_none() {
                ctx.theme.set(Theme::from_preference(*dark));
            }
        },
        false,
    );

    Effect::new(move || {
        dom::set_body_class(DARK_MODE_BODY_CLASS, ctx.theme.get().is_dark());
    });

    Effect::new(move || {
        let closed = ctx.maintenance.with(|m| m.is_closed());
        dom::set_body_class(maintenance::BODY_CLASS, closed);
    });

    poller::start_polling(move |status| ctx.apply_maintenance(status));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: 'Poppins', sans-serif;
                ">
                    <h1 style="color: #e74c3c; margin-bottom: 1rem;">
                        "Algo deu errado"
                    </h1>
                    <p style="margin-bottom: 2rem;">
                        "Ocorreu um erro inesperado. Tente recarregar a página."
                    </p>
                    <ul style="color: #e74c3c; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            margin-top: 1rem;
                            padding: 0.75rem 2rem;
                            border: none;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Recarregar"
                    </button>
                </div>
            }
        >
            <Navbar />
            <main>
                <Hero />
                <About />
                <Skills />
                <Projects />
                <ContactSection />
            </main>
            <Footer />
            <Toasts />
            <MaintenanceScreen />
        </ErrorBoundary>
    }
}
