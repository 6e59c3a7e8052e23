//! HTTP client for the random integer API.
//!
//! # Responsibilities
//! - Build the request URL from the configured base and fixed parameters
//! - Issue a single GET per batch
//! - Map transport errors, non-200 answers and bad bodies to `UpstreamError`

use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode, Url};

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::error::{UpstreamError, UpstreamResult};
use crate::upstream::parse::parse_integers;

/// One column, decimal, plaintext, fresh randomness.
const FIXED_PARAMS: [(&str, &str); 4] = [
    ("col", "1"),
    ("base", "10"),
    ("format", "plain"),
    ("rnd", "new"),
];

/// Anything that can produce a batch of random integers.
pub trait IntegerSource {
    /// Fetch `length` integers, in the order the source produced them.
    fn fetch_integers(&self, length: usize) -> impl Future<Output = UpstreamResult<Vec<i64>>> + Send;
}

/// Client for the upstream random integer API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: Url,
    min: i64,
    max: i64,
}

impl UpstreamClient {
    /// Create a client from configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            UpstreamError::Config(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| UpstreamError::Config(e.to_string()))?;

        tracing::debug!(
            base_url = %base_url,
            min = config.min,
            max = config.max,
            "Upstream client initialized"
        );

        Ok(Self {
            client,
            base_url,
            min: config.min,
            max: config.max,
        })
    }

    /// Full request URL for a batch of `length` integers.
    pub fn request_url(&self, length: usize) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("min", &self.min.to_string())
                .append_pair("max", &self.max.to_string());
            for (key, value) in FIXED_PARAMS {
                query.append_pair(key, value);
            }
            query.append_pair("num", &length.to_string());
        }
        url
    }

    async fn fetch(&self, length: usize) -> UpstreamResult<Vec<i64>> {
        let url = self.request_url(length);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        parse_integers(&body)
    }
}

impl IntegerSource for UpstreamClient {
    async fn fetch_integers(&self, length: usize) -> UpstreamResult<Vec<i64>> {
        let start = Instant::now();
        let result = self.fetch(length).await;

        match &result {
            Ok(values) => {
                tracing::debug!(
                    requested = length,
                    received = values.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Upstream batch fetched"
                );
                metrics::record_upstream_call("ok", start);
            }
            Err(e) => {
                tracing::warn!(
                    requested = length,
                    kind = e.kind(),
                    error = %e,
                    "Upstream batch failed"
                );
                metrics::record_upstream_call(e.kind(), start);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_carries_fixed_params_and_count() {
        let client = UpstreamClient::new(&UpstreamConfig::default()).unwrap();
        assert_eq!(
            client.request_url(5).as_str(),
            "https://www.random.org/integers/?min=1&max=100&col=1&base=10&format=plain&rnd=new&num=5"
        );
    }

    #[test]
    fn test_request_url_uses_configured_range() {
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:9000/ints".into(),
            min: -10,
            max: 10,
            ..UpstreamConfig::default()
        };
        let client = UpstreamClient::new(&config).unwrap();
        let url = client.request_url(10_000);

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("min".into(), "-10".into()));
        assert_eq!(pairs[1], ("max".into(), "10".into()));
        assert_eq!(pairs.last().unwrap(), &("num".into(), "10000".into()));
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let config = UpstreamConfig {
            base_url: "::not a url".into(),
            ..UpstreamConfig::default()
        };
        let err = UpstreamClient::new(&config).unwrap_err();
        assert_eq!(err.kind(), "config");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_unavailable() {
        // Port 9 (discard) on loopback is closed on test machines.
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:9/integers/".into(),
            connect_timeout_secs: Some(2),
            ..UpstreamConfig::default()
        };
        let client = UpstreamClient::new(&config).unwrap();

        let err = client.fetch_integers(3).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Unavailable(_)));
    }
}
