//! Validated email addresses for labelers.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{LabelError, Result};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("valid email regex")
});

/// An email address that passed format validation.
///
/// Only ASCII addresses are accepted: the local part uses the RFC 5322
/// atom characters and the domain must be LDH labels with at least one
/// dot. Internationalized addresses such as `josé@example.org` or
/// non-punycode IDN domains are rejected with `InvalidEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let Some((local, _)) = trimmed.split_once('@') else {
            return Err(LabelError::InvalidEmail(raw.to_string()));
        };
        if local.len() > 64 || local.starts_with('.') || local.ends_with('.') || local.contains("..") {
            return Err(LabelError::InvalidEmail(raw.to_string()));
        }
        if !EMAIL_RE.is_match(trimmed) {
            return Err(LabelError::InvalidEmail(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = LabelError;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
