//! Sibling HTTP service probe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::{DependencyProbe, Outcome};
use crate::config::SiblingConfig;

/// Issues one GET to the sibling service and expects exactly `200 OK`.
pub struct HttpServiceProbe {
    name: String,
    url: String,
    timeout: Duration,
    client: Client,
}

impl HttpServiceProbe {
    pub fn new(config: &SiblingConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create with a caller-supplied client (shared connection pool).
    pub fn with_client(config: &SiblingConfig, client: Client) -> Self {
        Self {
            name: config.name.clone(),
            url: config.url(),
            timeout: config.timeout,
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DependencyProbe for HttpServiceProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn check(&self) -> Outcome {
        let response = match self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Outcome::failed(e),
        };

        match response.status() {
            StatusCode::OK => Outcome::Connected,
            status => Outcome::failed(format!("status code {}", status.as_u16())),
        }
    }
}
