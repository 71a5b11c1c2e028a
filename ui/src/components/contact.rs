use dioxus::prelude::*;
use tracing::{debug, info, warn};

use crate::components::context::use_page;
use crate::core::form::{FieldState, SubmitError};
use crate::core::timing;
use crate::core::validation::Field;
use crate::core::visibility::REVEAL_CLASS;
use crate::i18n;
use crate::t;
use crate::views::page::field_ids;

const CONTENT_ID: &str = "contact-content";

const ERROR_STYLE: &str = "color: #e74c3c; font-size: 0.9rem; margin-top: 0.5rem;";

/// Contact section: static details plus the validated, simulated-submit form.
#[component]
pub fn Contact() -> Element {
    let page = use_page();
    let mut form = page.form;
    let bindings = page.bindings.read();
    let locale = bindings.active();
    let revealed = if page.revealed.read().has_fired(CONTENT_ID) {
        REVEAL_CLASS
    } else {
        ""
    };

    let (sending, opacity) = {
        let state = form.read();
        (state.is_sending(), state.submit_opacity())
    };
    let submit_label = if sending {
        t!(locale, "form-sending")
    } else {
        bindings.text("form-submit").to_string()
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let delay = match form.write().submit() {
            Ok(delay) => delay,
            Err(SubmitError::Busy) => {
                debug!("submit ignored while sending");
                return;
            }
            Err(SubmitError::Invalid(errors)) => {
                debug!(invalid = errors.len(), "contact form rejected");
                return;
            }
        };
        spawn(async move {
            timing::sleep_ms(delay).await;
            let Some(done) = form.write().complete() else {
                return;
            };
            match serde_json::to_string(&done.submission) {
                Ok(payload) => info!(%payload, "contact form submitted"),
                Err(err) => warn!("submission not serializable: {err}"),
            }
            page.notify(i18n::message(page.locale(), done.message_key), done.severity);
        });
    };

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "container",
                h2 { class: "section-title", "data-i18n": "contact-title",
                    {bindings.text("contact-title").to_string()}
                }
                div { id: CONTENT_ID, class: "contact-content {revealed}",
                    div { class: "contact-info",
                        h3 { "data-i18n": "contact-info-title",
                            {bindings.text("contact-info-title").to_string()}
                        }
                        p {
                            strong { "data-i18n": "contact-email-label",
                                {bindings.text("contact-email-label").to_string()}
                            }
                            " hello@example.com"
                        }
                        p {
                            strong { "data-i18n": "contact-location-label",
                                {bindings.text("contact-location-label").to_string()}
                            }
                            " "
                            span { "data-i18n": "contact-location",
                                {bindings.text("contact-location").to_string()}
                            }
                        }
                    }

                    form {
                        class: "contact-form",
                        "novalidate": "true",
                        onsubmit: handle_submit,
                        for field in Field::ALL {
                            FormField { key: "{field.name()}", field }
                        }
                        button {
                            r#type: "submit",
                            class: "submit-btn",
                            "data-i18n": "form-submit",
                            disabled: sending,
                            style: "opacity: {opacity};",
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}

/// Label, control and inline error for one contact field.
#[component]
fn FormField(field: Field) -> Element {
    let page = use_page();
    let mut form = page.form;
    let bindings = page.bindings.read();
    let locale = bindings.active();
    let (label_id, control_id) = field_ids(field);

    let (value, state) = {
        let form = form.read();
        (form.value(field).to_string(), form.state(field))
    };
    let border = state.border_color();
    let error = match state {
        FieldState::Invalid(err) => Some(i18n::message(locale, err.message_key())),
        _ => None,
    };
    let placeholder = bindings.placeholder(control_id).to_string();
    let input_type = if field == Field::Email { "email" } else { "text" };

    rsx! {
        div { class: "form-group",
            label { id: label_id, r#for: control_id, "data-i18n": label_id,
                {bindings.text(label_id).to_string()}
            }
            if field == Field::Message {
                textarea {
                    id: control_id,
                    name: field.name(),
                    rows: "5",
                    placeholder: "{placeholder}",
                    "data-i18n-placeholder": control_id,
                    style: "border-color: {border};",
                    value: "{value}",
                    oninput: move |evt: FormEvent| form.write().input(field, evt.value()),
                    onblur: move |_| {
                        form.write().blur(field);
                    },
                }
            } else {
                input {
                    id: control_id,
                    name: field.name(),
                    r#type: input_type,
                    placeholder: "{placeholder}",
                    "data-i18n-placeholder": control_id,
                    style: "border-color: {border};",
                    value: "{value}",
                    oninput: move |evt: FormEvent| form.write().input(field, evt.value()),
                    onblur: move |_| {
                        form.write().blur(field);
                    },
                }
            }
            if let Some(message) = error {
                div { class: "error-message", style: ERROR_STYLE, "{message}" }
            }
        }
    }
}
