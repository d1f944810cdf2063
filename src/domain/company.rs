//! Company information value types
//!
//! Plain immutable records: fields are set once in `new` and only read back
//! through accessors.

use crate::domain::business_id::BusinessId;
use serde::Serialize;

/// Company as resolved from the registry's historical records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyInfo {
    business_id: BusinessId,
    name: String,
    website: Option<String>,
    current_address: Address,
    business_lines: Vec<BusinessLine>,
}

impl CompanyInfo {
    pub fn new(
        business_id: BusinessId,
        name: String,
        website: Option<String>,
        current_address: Address,
        business_lines: Vec<BusinessLine>,
    ) -> Self {
        Self { business_id, name, website, current_address, business_lines }
    }

    pub fn business_id(&self) -> &BusinessId {
        &self.business_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Most recently registered contact detail that looks like a website
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    pub fn current_address(&self) -> &Address {
        &self.current_address
    }

    pub fn business_lines(&self) -> &[BusinessLine] {
        &self.business_lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    street: String,
    city: String,
    postal_code: String,
}

impl Address {
    pub fn new(street: String, city: String, postal_code: String) -> Self {
        Self { street, city, postal_code }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }
}

/// Registered field of activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessLine {
    code: String,
    description: String,
    language: String,
}

impl BusinessLine {
    pub fn new(code: String, description: String, language: String) -> Self {
        Self { code, description, language }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Language of `description`
    pub fn language(&self) -> &str {
        &self.language
    }
}
