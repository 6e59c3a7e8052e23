//! Plaintext response parsing.

use crate::upstream::error::{UpstreamError, UpstreamResult};

/// Parse a plaintext body holding one integer per line.
///
/// Lines are trimmed and blank lines skipped. The first line that is not an
/// integer fails the whole body. A body without any integer is an
/// [`UpstreamError::EmptyBatch`].
pub fn parse_integers(body: &str) -> UpstreamResult<Vec<i64>> {
    let mut values = Vec::new();

    for line in body.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = line.parse::<i64>().map_err(|source| UpstreamError::Malformed {
            line: line.to_string(),
            source,
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(UpstreamError::EmptyBatch);
    }
    Ok(values)
}
