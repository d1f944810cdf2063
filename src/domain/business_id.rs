//! Finnish business ID (y-tunnus) validation

use crate::domain::error::CompanyInfoError;
use regex::Regex;
use serde::Serialize;
use std::str::FromStr;
use std::sync::OnceLock;

static BUSINESS_ID_REGEX: OnceLock<Regex> = OnceLock::new();

/// 6-7 ASCII digits, a hyphen and one check digit. The check digit is not verified.
fn business_id_regex() -> &'static Regex {
    BUSINESS_ID_REGEX
        .get_or_init(|| Regex::new(r"^[0-9]{6,7}-[0-9]$").expect("Invalid business ID regex"))
}

/// Syntactically valid business ID
///
/// Only obtainable through [`validate_business_id`] (or `parse`), so holding one
/// means the format check already passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BusinessId(String);

impl BusinessId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BusinessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BusinessId {
    type Err = CompanyInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_business_id(s)
    }
}

impl AsRef<str> for BusinessId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check business ID syntax. Pure; no normalization or trimming is applied.
pub fn validate_business_id(business_id: &str) -> Result<BusinessId, CompanyInfoError> {
    if business_id_regex().is_match(business_id) {
        Ok(BusinessId(business_id.to_string()))
    } else {
        Err(CompanyInfoError::invalid_business_id(business_id))
    }
}
