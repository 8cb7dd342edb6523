//! Request and response bodies

use lexis_core::{ParsedQuery, RecordFilter, StringRecord};
use serde::{Deserialize, Serialize};

/// `GET /strings` response
#[derive(Debug, Serialize, Deserialize)]
pub struct StringListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: RecordFilter,
}

/// `GET /strings/filter-by-natural-language` query string
#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

/// `GET /strings/filter-by-natural-language` response
#[derive(Debug, Serialize, Deserialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    /// Query exactly as received
    pub query: String,
    pub interpreted_query: ParsedQuery,
}

/// `GET /health` response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
    pub uptime_seconds: u64,
}
