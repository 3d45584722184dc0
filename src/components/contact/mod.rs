//! Contact section with the validated form.
//!
//! Submission goes through [`ContactFormController`] with the EmailJS relay.
//! The phone input is masked as the user types.

mod state;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::form::MESSAGE_MAX_CHARS;
use crate::config::relay;
use crate::core::phone::{PhoneStatus, is_allowed_key};
use crate::core::{ContactFormController, EmailJs, RelayConfig};
use crate::models::FormField;
use crate::utils::dom;

pub use state::ContactFormState;

stylance::import_crate_style!(css, "src/components/contact/contact.module.css");

type Controller = ContactFormController<EmailJs, ContactFormState>;

/// Label, inline error and class for one plain text field.
#[component]
fn TextField(
    state: ContactFormState,
    field: FormField,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let value = state.value(field);
    let error = state.error(field);

    let field_class = move || {
        if error.with(|e| e.is_some()) {
            format!("{} {}", css::field, css::fieldInvalid)
        } else {
            css::field.to_string()
        }
    };

    view! {
        <div class=css::group>
            <label for=field.id() class=css::label>{field.label()}</label>
            <input
                id=field.id()
                name=field.id()
                type=input_type
                class=field_class
                placeholder=placeholder
                prop:value=value
                aria-invalid=move || if error.with(|e| e.is_some()) { "true" } else { "false" }
                on:input=move |ev| state.input(field, event_target_value(&ev))
                on:blur=move |_| state.check(field)
            />
            <span class=css::error role="alert">{move || error.get()}</span>
        </div>
    }
}

/// Masked phone input.
#[component]
fn PhoneInputField(state: ContactFormState) -> impl IntoView {
    let field = FormField::Phone;
    let value = state.value(field);
    let error = state.error(field);

    let field_class = move || match state.phone_status() {
        PhoneStatus::Neutral => css::field.to_string(),
        PhoneStatus::Valid => format!("{} {}", css::field, css::fieldValid),
        PhoneStatus::Invalid => format!("{} {}", css::field, css::fieldInvalid),
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if !is_allowed_key(&ev.key(), ev.ctrl_key() || ev.meta_key()) {
            ev.prevent_default();
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        let display = state.input_phone(&input.value());
        // Rejected characters leave the signal unchanged, so write back directly.
        input.set_value(&display);
    };

    view! {
        <div class=css::group>
            <label for=field.id() class=css::label>{field.label()}</label>
            <input
                id=field.id()
                name=field.id()
                type="tel"
                inputmode="numeric"
                autocomplete="tel"
                class=field_class
                placeholder="(21) 98765-4321"
                prop:value=value
                aria-invalid=move || if error.with(|e| e.is_some()) { "true" } else { "false" }
                on:keydown=on_keydown
                on:input=on_input
                on:blur=move |_| state.check(field)
            />
            <span class=css::error role="alert">{move || error.get()}</span>
        </div>
    }
}

/// Contact form section.
#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let state = ContactFormState::new(ctx.notifications);

    let relay_client = EmailJs::new(relay::PUBLIC_KEY);
    if let Err(e) = relay_client.ensure_init() {
        dom::warn(&e.to_string());
    }
    let controller: StoredValue<Rc<Controller>, LocalStorage> = StoredValue::new_local(Rc::new(
        ContactFormController::new(relay_client, state, RelayConfig::from_site_config()),
    ));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        spawn_local(async move {
            controller.submit().await;
        });
    };

    let message = state.value(FormField::Message);
    let message_error = state.error(FormField::Message);
    let message_class = move || {
        if message_error.with(|e| e.is_some()) {
            format!("{} {}", css::field, css::fieldInvalid)
        } else {
            css::field.to_string()
        }
    };
    let char_count = move || format!("{}/{}", message.with(|m| m.chars().count()), MESSAGE_MAX_CHARS);

    let submitting = state.submitting;

    view! {
        <section id="contact" class=css::section>
            <h2 class=css::title>"Contato"</h2>
            <p class=css::subtitle>"Tem um projeto em mente? Envie uma mensagem."</p>

            <form class=css::form novalidate=true on:submit=on_submit>
                <TextField state=state field=FormField::Name input_type="text" placeholder="Seu nome" />
                <TextField state=state field=FormField::Email input_type="email" placeholder="voce@exemplo.com" />
                <PhoneInputField state=state />
                <TextField state=state field=FormField::Subject input_type="text" placeholder="Assunto" />

                <div class=css::group>
                    <label for=FormField::Message.id() class=css::label>
                        {FormField::Message.label()}
                    </label>
                    <textarea
                        id=FormField::Message.id()
                        name=FormField::Message.id()
                        rows="6"
                        class=message_class
                        placeholder="Sua mensagem"
                        prop:value=message
                        on:input=move |ev| state.input(FormField::Message, event_target_value(&ev))
                        on:blur=move |_| state.check(FormField::Message)
                    ></textarea>
                    <span class=css::counter>{char_count}</span>
                    <span class=css::error role="alert">{move || message_error.get()}</span>
                </div>

                <button type="submit" class=css::submit disabled=move || submitting.get()>
                    <Icon icon=ic::SEND />
                    {move || if submitting.get() { "Enviando..." } else { "Enviar Mensagem" }}
                </button>
            </form>
        </section>
    }
}
