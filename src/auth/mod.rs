//! Account handshakes for the login and signup screens.
//!
//! Two independent flows share one collaborator, the single-slot
//! [`ProfileStore`](crate::store::ProfileStore):
//!
//! - registration validates a candidate identity and commits it as the sole
//!   stored record;
//! - login compares an attempt against that record and picks the
//!   destination for the account's role.
//!
//! Both are synchronous and idempotent. Denials never change state, so an
//! attempt can always be retried by resubmitting the form.

pub mod login;
pub mod register;
pub mod role;
pub(crate) mod rules;

pub use login::{
    email_input_feedback, login, EmailFeedback, LoginAttempt, LoginDenied, LoginOutcome,
};
pub use register::{register, validate, SignupForm, SignupOutcome};
pub use role::{Role, RoleParseError};
pub use rules::{Field, FieldErrors};
