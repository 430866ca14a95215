//! Input validation for the login form.
//!
//! Pure predicates over the current credentials. No side effects, no errors:
//! anything that does not match simply evaluates to `false`.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::MIN_PASSWORD_LEN;

/// `local@domain.tld`, no whitespace anywhere.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$";

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// The email/password pair as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Derived validity of a `Credentials` value.
///
/// Only [`ValidationResult::evaluate`] builds one, which keeps
/// `login_enabled == email_valid && password_valid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ValidationResult {
    email_valid: bool,
    password_valid: bool,
    login_enabled: bool,
}

impl ValidationResult {
    pub fn evaluate(credentials: &Credentials) -> Self {
        let email_valid = is_valid_email(&credentials.email);
        let password_valid = is_valid_password(&credentials.password);
        Self {
            email_valid,
            password_valid,
            login_enabled: email_valid && password_valid,
        }
    }

    pub const fn email_valid(&self) -> bool {
        self.email_valid
    }

    pub const fn password_valid(&self) -> bool {
        self.password_valid
    }

    pub const fn login_enabled(&self) -> bool {
        self.login_enabled
    }
}

/// Returns true if `s` looks like `local@domain.tld`.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.as_ref().is_some_and(|re| re.is_match(s))
}

/// Returns true if `s` has at least five user-perceived characters.
///
/// Intentionally weak: no upper bound and no character-class rules.
pub fn is_valid_password(s: &str) -> bool {
    !s.is_empty() && s.graphemes(true).count() >= MIN_PASSWORD_LEN
}

/// Returns true if both fields are valid.
pub fn is_login_enabled(email: &str, password: &str) -> bool {
    is_valid_email(email) && is_valid_password(password)
}
