//! Web utility functions
//!
//! This module provides utility functions for common web operations
//! like logging and request parameter parsing.

use axum::http::{Method, Uri};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::info;

use super::extractors::RequestContext;

/// Log an incoming HTTP request
pub fn log_request(method: &Method, uri: &Uri, context: &RequestContext) {
    info!(
        method = %method,
        uri = %uri,
        request_id = %context.request_id,
        user_agent = ?context.user_agent,
        real_ip = ?context.real_ip,
        "HTTP request"
    );
}

/// Extract a numeric record ID from a path parameter
pub fn extract_id_param(param: &str) -> Result<i64, String> {
    param
        .parse::<i64>()
        .map_err(|_| format!("Invalid id: {param}"))
}

/// Parse a due-date path parameter down to its calendar day
///
/// Accepts a bare date (`2026-08-06`), a naive datetime
/// (`2026-08-06T15:30:00`) or an RFC 3339 timestamp; anything with a time
/// component is truncated to its date part.
pub fn parse_due_date_param(param: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(param, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(param, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(param) {
        return Ok(datetime.date_naive());
    }
    Err(format!("Invalid due date: {param}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_id_param() {
        assert_eq!(extract_id_param("42").unwrap(), 42);
        assert!(extract_id_param("not-a-number").is_err());
        assert!(extract_id_param("").is_err());
    }

    #[test]
    fn test_parse_due_date_param() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(parse_due_date_param("2026-08-06").unwrap(), day);
        assert_eq!(parse_due_date_param("2026-08-06T15:30:00").unwrap(), day);
        assert_eq!(parse_due_date_param("2026-08-06T15:30:00Z").unwrap(), day);
        assert!(parse_due_date_param("06/08/2026").is_err());
        assert!(parse_due_date_param("soon").is_err());
    }
}
