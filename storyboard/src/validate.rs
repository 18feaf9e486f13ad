//! Form validation.
//!
//! Every form checks synchronously and reports the first failure. A failed
//! check never mutates anything; the caller keeps the form as typed.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::consts::{MIN_PASSWORD_LEN, PASSCODE_LEN};
use crate::generate::StylePreset;
use crate::team::Role;
use crate::user::ProfileUpdate;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Passwords do not match. Please try again.")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long.")]
    WeakPassword,
    #[error("Please agree to the terms and conditions.")]
    TermsNotAccepted,
    #[error("Please enter your email address.")]
    EmailRequired,
    #[error("Please enter an email address to send the invitation.")]
    InviteEmailRequired,
    #[error("Please enter a valid 6-digit passcode.")]
    InvalidPasscode,
    #[error("Please enter your name.")]
    NameRequired,
}

impl ValidationError {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingFields | Self::MissingRequiredFields => "Missing Information",
            Self::InvalidEmail => "Invalid Email",
            Self::PasswordMismatch => "Password Mismatch",
            Self::WeakPassword => "Weak Password",
            Self::TermsNotAccepted => "Terms Required",
            Self::EmailRequired | Self::InviteEmailRequired => "Email Required",
            Self::InvalidPasscode => "Invalid Passcode",
            Self::NameRequired => "Name Required",
        }
    }
}

/// `local@domain.tld`: exactly one `@`, a non-empty local part, and a domain
/// of at least two non-empty dot-separated labels. No whitespace anywhere.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

fn blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Missing fields first, then a malformed email.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if blank(&self.email) || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub preferred_style: StylePreset,
    pub accept_terms: bool,
}

impl SignupForm {
    /// # Errors
    ///
    /// Checked in order: required fields, email format, confirmation match,
    /// password length, terms.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if blank(&self.name) || blank(&self.email) || self.password.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::WeakPassword);
        }
        if !self.accept_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetForm {
    pub email: String,
}

impl ResetForm {
    /// # Errors
    ///
    /// [`ValidationError::EmailRequired`] or [`ValidationError::InvalidEmail`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if blank(&self.email) {
            return Err(ValidationError::EmailRequired);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InviteForm {
    pub email: String,
    pub role: Role,
}

impl InviteForm {
    /// # Errors
    ///
    /// [`ValidationError::InviteEmailRequired`] or [`ValidationError::InvalidEmail`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if blank(&self.email) {
            return Err(ValidationError::InviteEmailRequired);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

impl ProfileUpdate {
    /// # Errors
    ///
    /// [`ValidationError::NameRequired`] or [`ValidationError::InvalidEmail`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if blank(&self.name) {
            return Err(ValidationError::NameRequired);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Six ASCII digits, nothing else.
///
/// # Errors
///
/// [`ValidationError::InvalidPasscode`] for anything else.
pub fn validate_passcode(raw: &str) -> Result<(), ValidationError> {
    if raw.len() == PASSCODE_LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPasscode)
    }
}
