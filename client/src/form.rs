//! Contact form validation.
//!
//! All three fields are required after trimming. Validation returns a value
//! naming the failing fields; the browser glue renders it next to the form
//! and cancels the submission. A valid form submits through its normal
//! full-page POST to the ingestion endpoint.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::dom::Element;
use crate::selectors::ARIA_INVALID;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// The form control's `name` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// A submission whose fields are all non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Veuillez remplir tous les champs avant d’envoyer.")]
pub struct ValidationError {
    /// Failing fields in form order.
    pub missing: Vec<ContactField>,
}

/// Trim the three fields and require each to be non-empty.
///
/// # Errors
///
/// Returns [`ValidationError`] listing every blank field.
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<ContactDraft, ValidationError> {
    let (name, email, message) = (name.trim(), email.trim(), message.trim());
    let missing: Vec<ContactField> = ContactField::ALL
        .into_iter()
        .zip([name, email, message])
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError { missing });
    }
    Ok(ContactDraft { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
}

/// Set `aria-invalid` on each control according to `error`.
pub fn mark_fields<E: Element>(controls: &[(ContactField, E)], error: Option<&ValidationError>) {
    for (field, control) in controls {
        let invalid = error.is_some_and(|e| e.missing.contains(field));
        control.set_attr(ARIA_INVALID, if invalid { "true" } else { "false" });
    }
}

/// Show the validation message in `status`, or clear it.
pub fn show_status<E: Element>(status: &E, error: Option<&ValidationError>) {
    match error {
        Some(error) => status.set_text(&error.to_string()),
        None => status.set_text(""),
    }
}

/// Validate the `.contact-form` on submit; cancel and report when invalid.
#[cfg(feature = "browser")]
pub fn mount(window: &web_sys::Window, document: &web_sys::Document) -> bool {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

    use crate::dom::web::{listen, select};
    use crate::selectors::{CONTACT_FORM, FORM_STATUS};

    let Some(form) = select(document, CONTACT_FORM).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) else {
        return false;
    };

    let window = window.clone();
    let form_for_submit = form.clone();
    listen(&form, "submit", move |event| {
        let controls: Vec<(ContactField, web_sys::Element)> = ContactField::ALL
            .into_iter()
            .filter_map(|field| {
                let selector = format!("[name=\"{}\"]", field.name());
                let control = form_for_submit.query_selector(&selector).unwrap_or(None)?;
                Some((field, control))
            })
            .collect();
        let value_of = |field: ContactField| -> String {
            controls
                .iter()
                .find(|(f, _)| *f == field)
                .and_then(|(_, el)| {
                    el.dyn_ref::<HtmlInputElement>()
                        .map(HtmlInputElement::value)
                        .or_else(|| el.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value))
                })
                .unwrap_or_default()
        };

        let result = validate_contact(
            &value_of(ContactField::Name),
            &value_of(ContactField::Email),
            &value_of(ContactField::Message),
        );
        let error = result.as_ref().err();
        mark_fields(&controls, error);

        let status = form_for_submit.query_selector(FORM_STATUS).unwrap_or(None);
        if let Some(status) = &status {
            show_status(status, error);
        }

        if let Some(error) = error {
            event.prevent_default();
            log::info!("contact form blocked, missing: {:?}", error.missing);
            if status.is_none() {
                if let Err(err) = window.alert_with_message(&error.to_string()) {
                    log::warn!("alert failed: {err:?}");
                }
            }
        }
    });
    true
}
