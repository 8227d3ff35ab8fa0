//! Contact form
//!
//! Submission is intercepted and validated locally. A valid form gets the
//! placeholder acknowledgement inline and is cleared; nothing is sent.

use folio_core::contact::{ContactError, ContactField, ContactForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

fn field_message(errors: RwSignal<Vec<ContactError>>, field: ContactField) -> Option<String> {
    errors.with(|errors| {
        errors
            .iter()
            .find(|error| error.field() == field)
            .map(ToString::to_string)
    })
}

#[component]
pub fn ContactFormView() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<ContactError>::new());
    let acknowledgement = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm::new(name.get_untracked(), email.get_untracked(), message.get_untracked());
        match form.submit() {
            Ok(ack) => {
                errors.set(Vec::new());
                acknowledgement.set(Some(ack.message().to_string()));
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            Err(found) => {
                acknowledgement.set(None);
                errors.set(found);
            }
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <label>
                "Name"
                <input
                    type="text"
                    name="name"
                    autocomplete="name"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <p class="field-error">{move || field_message(errors, ContactField::Name)}</p>

            <label>
                "Email"
                <input
                    type="email"
                    name="email"
                    autocomplete="email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <p class="field-error">{move || field_message(errors, ContactField::Email)}</p>

            <label>
                "Message"
                <textarea
                    name="message"
                    rows="5"
                    required=true
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <p class="field-error">{move || field_message(errors, ContactField::Message)}</p>

            <button type="submit" class="button">"Send message"</button>
            <p class="form-status" role="status">{move || acknowledgement.get()}</p>
        </form>
    }
}
