//! Registry response mapping
//!
//! Turns a BIS v1 response body into a `CompanyInfo`. Registry records are
//! historical and unordered, so the current address and website are resolved
//! by registration date:
//! - addresses: the most recently registered record wins, and it must be complete
//! - contact details: the most recent record whose value looks like a website wins
//! - business lines: every well-formed record is kept, malformed ones are dropped
//!
//! Records are kept as `serde_json::Value` so a single bad record can be
//! skipped without failing the whole response.

use crate::domain::business_id::BusinessId;
use crate::domain::company::{Address, BusinessLine, CompanyInfo};
use crate::domain::error::CompanyInfoError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::cmp::Reverse;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

static WEBSITE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Permissive website shape: optional scheme, then a run containing at least one dot.
/// Unanchored, so any value containing such a run is accepted.
fn website_regex() -> &'static Regex {
    WEBSITE_REGEX.get_or_init(|| {
        Regex::new(r"((http|https)://)?[a-zA-Z0-9./?:@\-_=#]+\.[a-zA-Z0-9&./?:@\-_=#]*")
            .expect("Invalid website regex")
    })
}

/// Field-level reason a response was rejected. Logged, never returned to callers.
#[derive(Debug, Error)]
pub(crate) enum MappingError {
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has no results")]
    NoResults,

    #[error("field '{0}' is missing or has the wrong type")]
    Field(&'static str),

    #[error("company has no address records")]
    NoAddress,
}

#[derive(Debug, Deserialize)]
struct RegistryResponse {
    #[serde(default)]
    results: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RawAddress {
    street: String,
    city: String,
    #[serde(rename = "postCode")]
    post_code: String,
}

#[derive(Debug, Deserialize)]
struct RawBusinessLine {
    code: String,
    name: String,
    language: String,
}

/// Map a registry response body for `business_id`.
///
/// Every failure collapses into `UnexpectedClientData`; the specific reason is
/// only visible in debug logs.
pub fn map_company_info(
    business_id: &BusinessId,
    body: &[u8],
) -> Result<CompanyInfo, CompanyInfoError> {
    map_response(business_id, body).map_err(|e| {
        debug!(business_id = %business_id, reason = %e, "company_data_rejected");
        CompanyInfoError::unexpected_data(business_id.as_str())
    })
}

fn map_response(business_id: &BusinessId, body: &[u8]) -> Result<CompanyInfo, MappingError> {
    let response: RegistryResponse = serde_json::from_slice(body)?;
    let company = response.results.into_iter().next().ok_or(MappingError::NoResults)?;

    let name = company
        .get("name")
        .and_then(Value::as_str)
        .ok_or(MappingError::Field("name"))?
        .to_string();

    let website = website(records(&company, "contactDetails")?);
    let current_address = current_address(records(&company, "addresses")?)?;
    let business_lines = business_lines(records(&company, "businessLines")?);

    Ok(CompanyInfo::new(business_id.clone(), name, website, current_address, business_lines))
}

/// Array field of the company object; absent or non-array is a mapping error
fn records<'a>(company: &'a Value, field: &'static str) -> Result<&'a [Value], MappingError> {
    company
        .get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or(MappingError::Field(field))
}

/// Parse a `registrationDate` field.
///
/// Accepts RFC 3339 (normalized to UTC), naive date-times and plain dates.
/// Returns `None` when the field is missing or unparsable.
pub fn registration_date(record: &Value) -> Option<NaiveDateTime> {
    let raw = record.get("registrationDate")?.as_str()?.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Records ordered most recent first.
///
/// Stable: equal dates keep input order. Records without a usable date sort
/// after every dated record (`None < Some` under `Reverse`).
pub fn sort_by_registration_date(records: &[Value]) -> Vec<&Value> {
    let mut sorted: Vec<&Value> = records.iter().collect();
    sorted.sort_by_key(|record| Reverse(registration_date(record)));
    sorted
}

fn current_address(addresses: &[Value]) -> Result<Address, MappingError> {
    let latest = sort_by_registration_date(addresses)
        .into_iter()
        .next()
        .ok_or(MappingError::NoAddress)?;

    let raw = RawAddress::deserialize(latest).map_err(|_| MappingError::Field("addresses"))?;
    Ok(Address::new(raw.street, raw.city, raw.post_code))
}

fn website(contact_details: &[Value]) -> Option<String> {
    sort_by_registration_date(contact_details)
        .into_iter()
        .filter_map(|detail| detail.get("value").and_then(Value::as_str))
        .find(|value| is_valid_website(value))
        .map(str::to_string)
}

pub fn is_valid_website(value: &str) -> bool {
    website_regex().is_match(value)
}

fn business_lines(records: &[Value]) -> Vec<BusinessLine> {
    records
        .iter()
        .filter_map(|record| RawBusinessLine::deserialize(record).ok())
        .map(|raw| BusinessLine::new(raw.code, raw.name, raw.language))
        .collect()
}
