//! Domain models - business ID, company value types and error kinds
//!
//! - `business_id` - business ID validation and the `BusinessId` newtype
//! - `company` - `CompanyInfo`, `Address`, `BusinessLine`
//! - `error` - `CompanyInfoError`, the only error type callers see

pub mod business_id;
pub mod company;
pub mod error;

// Re-export commonly used types at module level
pub use business_id::{validate_business_id, BusinessId};
pub use company::{Address, BusinessLine, CompanyInfo};
pub use error::CompanyInfoError;
