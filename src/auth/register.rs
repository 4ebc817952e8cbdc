//! Registration handshake: validate a candidate identity and commit it as
//! the single stored account record.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::auth::role::Role;
use crate::auth::rules::{
    Field, FieldErrors, CONFIRM_PASSWORD_MESSAGE, EMAIL_CHECK, NAME_CHECK, PASSWORD_CHECK,
    PHONE_CHECK, ROLE_MESSAGE, TERMS_MESSAGE,
};
use crate::routes::Destination;
use crate::store::{ProfileStore, StoreKey};

/// Candidate identity captured by the signup screen.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub role: Option<Role>,
    pub terms_accepted: bool,
}

/// Result of a signup submission.
#[derive(Clone, Debug, PartialEq)]
pub enum SignupOutcome {
    /// The record was stored; the caller should continue to `next`.
    Created { next: Destination },
    /// At least one rule failed; the store was not touched.
    Rejected(FieldErrors),
}

/// Run every rule over the form, reporting all failures at once.
///
/// An empty mapping means the form may be committed.
#[must_use]
pub fn validate(form: &SignupForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for (value, check) in [
        (form.name.as_str(), &NAME_CHECK),
        (form.email.as_str(), &EMAIL_CHECK),
        (form.password.as_str(), &PASSWORD_CHECK),
        (form.phone.as_str(), &PHONE_CHECK),
    ] {
        check.run(value, &mut errors);
    }

    if form.confirm_password != form.password {
        errors.insert(Field::ConfirmPassword, CONFIRM_PASSWORD_MESSAGE);
    }

    if form.role.is_none() {
        errors.insert(Field::Role, ROLE_MESSAGE);
    }

    if !form.terms_accepted {
        errors.insert(Field::TermsAccepted, TERMS_MESSAGE);
    }

    errors
}

/// Validate the form and, on success, overwrite the stored record with the
/// candidate's email, password, and role.
///
/// Registering again replaces the previous record; there is no merge and no
/// versioning. Given the same input the handshake is idempotent.
///
/// # Errors
/// Returns an error only when the store itself fails to write.
#[instrument(skip(store, form))]
pub fn register(store: &mut dyn ProfileStore, form: &SignupForm) -> Result<SignupOutcome> {
    let errors = validate(form);

    match (form.role, errors.is_empty()) {
        (Some(role), true) => {
            store.set(StoreKey::Email, &form.email)?;
            store.set(StoreKey::Password, &form.password)?;
            store.set(StoreKey::Role, role.as_str())?;
            debug!(email = %form.email, role = role.as_str(), "account stored");
            Ok(SignupOutcome::Created {
                next: Destination::Login,
            })
        }
        _ => {
            debug!(fields = errors.len(), "signup rejected");
            Ok(SignupOutcome::Rejected(errors))
        }
    }
}
