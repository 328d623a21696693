//! Contact form endpoint.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::{error, warn};

use crate::services::contact::{self, ContactError};
use crate::state::AppState;

/// Form body posted by the contact page. Absent fields read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        ContactError::Rejected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /send_message`: store a submission and confirm it.
pub async fn submit(State(state): State<AppState>, form: Result<Form<ContactForm>, FormRejection>) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(%rejection, "unreadable contact form body; treating fields as empty");
            ContactForm::default()
        }
    };

    match contact::record(state.store.as_ref(), &form.name, &form.email, &form.message).await {
        Ok(stored) => Html(stored.confirmation()).into_response(),
        Err(err) => {
            error!(error = %err, "contact submission failed");
            (contact_error_to_status(&err), Html(err.public_message())).into_response()
        }
    }
}

/// Any other method on the contact paths: empty success, nothing stored.
pub async fn ignore() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
