use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// One entry of a `/random/mean` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub stddev: f64,
    pub data: Vec<i64>,
}

pub struct MeanClient {
    client: Client,
    service_url: String,
}

impl MeanClient {
    pub fn new(service_url: &str) -> Self {
        Self {
            client: Client::new(),
            service_url: service_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request `requests` batches of `length` integers. The last returned
    /// batch is the aggregate of all the others.
    pub async fn random_mean(&self, length: u32, requests: u32) -> Result<Vec<Batch>, Box<dyn std::error::Error>> {
        let resp = self
            .get_raw(&format!("/random/mean?length={}&requests={}", length, requests))
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Service returned error status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str::<Vec<Batch>>(&text)?)
    }

    /// Perform a GET against the service, returning the response untouched.
    pub async fn get_raw(&self, path_and_query: &str) -> Result<Response, reqwest::Error> {
        self.client
            .get(format!("{}{}", self.service_url, path_and_query))
            .send()
            .await
    }
}
