//! PRH company info library
//!
//! Looks up Finnish companies in the PRH open data registry (BIS v1) by
//! business ID and resolves the historical records into a `CompanyInfo`.

pub mod domain;
pub mod infra;
pub mod io;
pub mod services;
