//! Field validation rules shared by the signup and login handshakes.
//!
//! Each rule pairs a predicate over the raw field value with the message
//! shown when it fails. Rules are independent: a submission runs all of
//! them and reports every failing field at once.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;

/// Domains a signup email may use, checked on top of the shape regex.
const ALLOWED_SIGNUP_DOMAINS: [&str; 2] = ["@yahoo.com", "@email.com"];

/// Characters satisfying the password special-character requirement.
const PASSWORD_SPECIALS: &str = "!@#$%^&*";

/// Minimum password length, in characters.
const MIN_PASSWORD_CHARS: usize = 6;

pub(crate) const NAME_MESSAGE: &str =
    "Name should only contain alphabets and spaces, no numbers";
pub(crate) const EMAIL_MESSAGE: &str =
    "Email must be lowercase, no spaces, and end with @yahoo.com or @email.com";
pub(crate) const PASSWORD_MESSAGE: &str =
    "Password must include an uppercase letter, a special character, and at least 6 characters";
pub(crate) const CONFIRM_PASSWORD_MESSAGE: &str = "Passwords do not match";
pub(crate) const PHONE_MESSAGE: &str =
    "Phone number must start with 6, 7, 8, or 9 and have 10 digits";
pub(crate) const ROLE_MESSAGE: &str = "Please select who you are";
pub(crate) const TERMS_MESSAGE: &str = "You must accept the terms and conditions";
pub(crate) const LOGIN_EMAIL_MESSAGE: &str = "Email must end with @gmail.com or @yahoo.com";

/// Signup fields, named exactly as the screen's error-mapping keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Role,
    TermsAccepted,
}

impl Field {
    /// Error-mapping key for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Phone => "phone",
            Self::Role => "role",
            Self::TermsAccepted => "termsAccepted",
        }
    }
}

/// Field → message mapping produced by validation.
///
/// Empty means the form may be committed; otherwise there is one entry per
/// failing field and none for fields that passed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    /// Message for one field, when it failed.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

/// One validation rule: a predicate over the raw value plus the message
/// reported when it fails.
pub(crate) struct FieldCheck {
    pub(crate) field: Field,
    pub(crate) message: &'static str,
    pub(crate) check: fn(&str) -> bool,
}

impl FieldCheck {
    pub(crate) fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }

    /// Run the rule, recording the failure message on a miss.
    pub(crate) fn run(&self, value: &str, errors: &mut FieldErrors) {
        if !self.passes(value) {
            errors.insert(self.field, self.message);
        }
    }
}

pub(crate) const NAME_CHECK: FieldCheck = FieldCheck {
    field: Field::Name,
    message: NAME_MESSAGE,
    check: valid_name,
};

pub(crate) const EMAIL_CHECK: FieldCheck = FieldCheck {
    field: Field::Email,
    message: EMAIL_MESSAGE,
    check: valid_signup_email,
};

pub(crate) const PASSWORD_CHECK: FieldCheck = FieldCheck {
    field: Field::Password,
    message: PASSWORD_MESSAGE,
    check: valid_password,
};

pub(crate) const PHONE_CHECK: FieldCheck = FieldCheck {
    field: Field::Phone,
    message: PHONE_MESSAGE,
    check: valid_phone,
};

/// Email shape gate applied at login; a different allowed-domain set than
/// signup's, kept exactly as the screens ship it.
pub(crate) const LOGIN_EMAIL_CHECK: FieldCheck = FieldCheck {
    field: Field::Email,
    message: LOGIN_EMAIL_MESSAGE,
    check: valid_login_email,
};

fn valid_name(name: &str) -> bool {
    Regex::new(r"^[A-Za-z\s]+$").map_or(false, |re| re.is_match(name))
}

fn valid_signup_email(email: &str) -> bool {
    let shape = Regex::new(r"^[a-z0-9]+@[a-z]+\.com$").map_or(false, |re| re.is_match(email));
    shape
        && ALLOWED_SIGNUP_DOMAINS
            .iter()
            .any(|domain| email.ends_with(domain))
}

// The screen's rule is a lookahead regex; the regex crate has no lookaround,
// so the same four conditions are checked directly. Length is in characters,
// matching what `.{6,}` counted.
fn valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

fn valid_phone(phone: &str) -> bool {
    Regex::new(r"^[6-9][0-9]{9}$").map_or(false, |re| re.is_match(phone))
}

fn valid_login_email(email: &str) -> bool {
    Regex::new(r"^(.*)@(gmail\.com|yahoo\.com)$").map_or(false, |re| re.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn name_accepts_letters_and_spaces() {
        assert!(valid_name("Jane Doe"));
        assert!(valid_name("jane"));
    }

    #[test]
    fn name_rejects_digits_symbols_and_empty() {
        assert!(!valid_name("Jane 2"));
        assert!(!valid_name("jane.doe"));
        assert!(!valid_name(""));
    }

    #[test]
    fn signup_email_requires_shape_and_allowed_domain() {
        assert!(valid_signup_email("jane@yahoo.com"));
        assert!(valid_signup_email("jane1@email.com"));
        // shape passes but the domain is outside the allow list
        assert!(!valid_signup_email("jane@gmail.com"));
        assert!(!valid_signup_email("Jane@yahoo.com"));
        assert!(!valid_signup_email("jane doe@yahoo.com"));
        assert!(!valid_signup_email("jane@yahoo.org"));
        assert!(!valid_signup_email("jane.doe@yahoo.com"));
    }

    #[test]
    fn password_needs_upper_lower_special_and_length() {
        assert!(valid_password("Abcd1!"));
        assert!(valid_password("Zz@zzzzzzzzzz"));
        assert!(!valid_password("abcdef"));
        assert!(!valid_password("ABCDEF!"));
        assert!(!valid_password("Abcdef"));
        assert!(!valid_password("Abc1!"));
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // five characters, seven bytes
        assert!(!valid_password("Aé!bé"));
        assert!(valid_password("Aé!béc"));
    }

    #[test]
    fn phone_requires_ten_digits_starting_six_to_nine() {
        assert!(valid_phone("9876543210"));
        assert!(valid_phone("6000000000"));
        assert!(!valid_phone("5876543210"));
        assert!(!valid_phone("987654321"));
        assert!(!valid_phone("98765432101"));
        assert!(!valid_phone("98765abc10"));
    }

    #[test]
    fn login_email_accepts_only_gmail_and_yahoo() {
        assert!(valid_login_email("a@gmail.com"));
        assert!(valid_login_email("a@yahoo.com"));
        // looser than signup: uppercase local parts pass this gate
        assert!(valid_login_email("Jane.Doe@yahoo.com"));
        assert!(!valid_login_email("a@email.com"));
        assert!(!valid_login_email("agmail.com"));
        assert!(!valid_login_email("a@gmail.org"));
    }

    #[test]
    fn checks_record_their_message_on_a_miss() {
        let mut errors = FieldErrors::new();
        PHONE_CHECK.run("123", &mut errors);
        assert_eq!(errors.message(Field::Phone), Some(PHONE_MESSAGE));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn field_errors_serialize_under_screen_keys() -> Result<()> {
        let mut errors = FieldErrors::new();
        errors.insert(Field::ConfirmPassword, CONFIRM_PASSWORD_MESSAGE);
        errors.insert(Field::TermsAccepted, TERMS_MESSAGE);

        let value = serde_json::to_value(&errors)?;
        assert_eq!(value["confirmPassword"], CONFIRM_PASSWORD_MESSAGE);
        assert_eq!(value["termsAccepted"], TERMS_MESSAGE);
        Ok(())
    }

    #[test]
    fn field_keys_match_serde_names() {
        for field in [
            Field::Name,
            Field::Email,
            Field::Password,
            Field::ConfirmPassword,
            Field::Phone,
            Field::Role,
            Field::TermsAccepted,
        ] {
            let serialized = serde_json::to_value(field).expect("field serializes");
            assert_eq!(serialized, field.as_str());
        }
    }
}
