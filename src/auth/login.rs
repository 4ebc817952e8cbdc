//! Login handshake: gate the attempt's email shape, compare it against the
//! stored record, and pick the destination for the account's role.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::auth::role::Role;
use crate::auth::rules::{LOGIN_EMAIL_CHECK, LOGIN_EMAIL_MESSAGE};
use crate::routes::Destination;
use crate::store::{ProfileStore, StoreKey};

/// One sign-in attempt; compared against the stored record and discarded.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoginAttempt {
    pub email: String,
    pub password: String,
}

/// Result of a login submission.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    /// Credentials matched; the caller should continue to `next`.
    SignedIn { role: Role, next: Destination },
    /// The attempt was denied. The store is unchanged and the attempt may
    /// be retried immediately; there is no lockout and no rate limit.
    Denied(LoginDenied),
}

/// User-visible denial reasons.
///
/// A missing account and a wrong password both surface as `Credentials`;
/// the caller cannot tell them apart.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LoginDenied {
    #[error("{}", LOGIN_EMAIL_MESSAGE)]
    EmailFormat,
    #[error("Invalid credentials")]
    Credentials,
    /// Credentials matched but the stored role is absent or outside the
    /// closed set, so there is no destination to dispatch to.
    #[error("Account role is not recognized; please sign up again")]
    UnknownRole,
}

/// Live feedback for the login email field, re-run on every keystroke.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmailFeedback {
    /// Input with all whitespace stripped; the screen echoes this back.
    pub value: String,
    /// Shape-gate message, present until the value passes.
    pub error: Option<&'static str>,
}

/// Strip whitespace from the raw input and re-run the shape gate.
///
/// Pure and synchronous; the only output is the cleaned value and the
/// message to display.
#[must_use]
pub fn email_input_feedback(raw: &str) -> EmailFeedback {
    let value: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let error = if LOGIN_EMAIL_CHECK.passes(&value) {
        None
    } else {
        Some(LOGIN_EMAIL_MESSAGE)
    };

    EmailFeedback { value, error }
}

/// Authenticate an attempt against the stored record.
///
/// The email shape gate runs first and denies without touching the store's
/// credentials; a full match then dispatches on the stored role.
///
/// # Errors
/// Returns an error only when the store itself fails to read.
#[instrument(skip(store, attempt))]
pub fn login(store: &dyn ProfileStore, attempt: &LoginAttempt) -> Result<LoginOutcome> {
    if !LOGIN_EMAIL_CHECK.passes(&attempt.email) {
        debug!("login email failed the shape gate");
        return Ok(LoginOutcome::Denied(LoginDenied::EmailFormat));
    }

    let stored_email = store.get(StoreKey::Email)?;
    let stored_password = store.get(StoreKey::Password)?;

    // An absent key never matches; both fields must be equal byte for byte.
    let matched = stored_email.as_deref() == Some(attempt.email.as_str())
        && stored_password.as_deref() == Some(attempt.password.as_str());
    if !matched {
        debug!("credentials did not match the stored record");
        return Ok(LoginOutcome::Denied(LoginDenied::Credentials));
    }

    match store.get(StoreKey::Role)? {
        Some(value) => match value.parse::<Role>() {
            Ok(role) => {
                debug!(role = role.as_str(), "signed in");
                Ok(LoginOutcome::SignedIn {
                    role,
                    next: role.destination(),
                })
            }
            Err(_) => {
                error!(stored = %value, "stored role is outside the closed set");
                Ok(LoginOutcome::Denied(LoginDenied::UnknownRole))
            }
        },
        None => {
            error!("credentials matched but no role is stored");
            Ok(LoginOutcome::Denied(LoginDenied::UnknownRole))
        }
    }
}
