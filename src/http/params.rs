//! Query parameter validation for `/random/mean`.

use thiserror::Error;
use url::form_urlencoded;

/// Accepted range for the `requests` parameter.
pub const REQUESTS_RANGE: std::ops::RangeInclusive<usize> = 1..=10;

/// Accepted range for the `length` parameter.
pub const LENGTH_RANGE: std::ops::RangeInclusive<usize> = 1..=10_000;

/// Rejection of a request's query parameters. The messages are the response
/// bodies sent to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("You have to provide 2 parameters: request(int) and length(int)")]
    Missing,

    #[error("Request parameter must to be integer in range 1 - 10!")]
    RequestsOutOfRange,

    #[error("Length parameter must to be integer in range 1 - 10.000!")]
    LengthOutOfRange,
}

/// Validated parameters of a `/random/mean` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestParameters {
    /// Integers per upstream call.
    pub length: usize,
    /// Number of upstream calls.
    pub requests: usize,
}

impl RequestParameters {
    /// Parse from a raw query string.
    ///
    /// Checks run in a fixed order: presence of both parameters, then
    /// `requests`, then `length`. When a key repeats, its first value is used.
    pub fn from_query(query: Option<&str>) -> Result<Self, ParamError> {
        let query = query.unwrap_or_default();
        let length = first_value(query, "length");
        let requests = first_value(query, "requests");

        let (length, requests) = match (length, requests) {
            (Some(l), Some(r)) if !l.is_empty() && !r.is_empty() => (l, r),
            _ => return Err(ParamError::Missing),
        };

        let requests = parse_in_range(&requests, &REQUESTS_RANGE)
            .ok_or(ParamError::RequestsOutOfRange)?;
        let length =
            parse_in_range(&length, &LENGTH_RANGE).ok_or(ParamError::LengthOutOfRange)?;

        Ok(Self { length, requests })
    }
}

fn first_value(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

fn parse_in_range(raw: &str, range: &std::ops::RangeInclusive<usize>) -> Option<usize> {
    // Parse signed so "-1" is out of range rather than a different failure.
    let value = raw.parse::<i64>().ok()?;
    usize::try_from(value).ok().filter(|v| range.contains(v))
}
