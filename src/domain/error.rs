//! Error kinds surfaced by a company lookup
//!
//! Callers only ever see one of these three kinds. Transport and mapping
//! failures are translated into them at the service boundary.

use thiserror::Error;

/// Result type alias for company lookups
pub type Result<T> = std::result::Result<T, CompanyInfoError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompanyInfoError {
    /// Input does not look like a business ID; raised before any request
    #[error("'{business_id}' is not valid business ID.")]
    InvalidBusinessId { business_id: String },

    /// The registry request failed (network error, non-2xx status, timeout)
    #[error("Company not found for business ID '{business_id}'.")]
    CompanyNotFound { business_id: String },

    /// A response arrived but could not be mapped into a `CompanyInfo`
    #[error("Company with business ID '{business_id}' had insufficient data")]
    UnexpectedClientData { business_id: String },
}

impl CompanyInfoError {
    pub fn invalid_business_id<S: Into<String>>(business_id: S) -> Self {
        Self::InvalidBusinessId { business_id: business_id.into() }
    }

    pub fn not_found<S: Into<String>>(business_id: S) -> Self {
        Self::CompanyNotFound { business_id: business_id.into() }
    }

    pub fn unexpected_data<S: Into<String>>(business_id: S) -> Self {
        Self::UnexpectedClientData { business_id: business_id.into() }
    }

    /// Business ID the failed lookup was made with
    pub fn business_id(&self) -> &str {
        match self {
            Self::InvalidBusinessId { business_id }
            | Self::CompanyNotFound { business_id }
            | Self::UnexpectedClientData { business_id } => business_id,
        }
    }

    /// Short machine-readable name of the error kind, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidBusinessId { .. } => "invalid_business_id",
            Self::CompanyNotFound { .. } => "company_not_found",
            Self::UnexpectedClientData { .. } => "unexpected_client_data",
        }
    }
}
