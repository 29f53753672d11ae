//! User profile and login validation.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Permissive local-part@domain.tld shape check. Deliberately loose; the
/// goal is catching obvious typos, not RFC 5322 conformance.
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").expect("email regex is valid")
    })
}

/// Profile captured at login.
///
/// `name`, `email`, `education_level` and `state` are required;
/// `institution` and `city` may be left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub education_level: String,
    #[serde(default)]
    pub institution: String,
    pub state: String,
    #[serde(default)]
    pub city: String,
}

impl UserProfile {
    /// Check required fields and email shape.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a missing required field, or a
    /// malformed email address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("education_level", &self.education_level),
            ("state", &self.state),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if !email_regex().is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}
