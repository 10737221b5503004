//! HTTP latency source.
//!
//! `ureq` is blocking, so the request runs on tokio's blocking pool and the
//! caller awaits a single future.

use std::io::Read;

use tracing::debug;
use url::Url;

use super::decode;
use crate::data::Sample;
use crate::error::LoadError;

/// Fetches a latency array over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    description: String,
    client: ureq::Agent,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        let description = format!("http: {}", url);
        Self {
            url,
            description,
            client: ureq::AgentBuilder::new()
                .redirects(5)
                .user_agent(concat!("latency-scatter/", env!("CARGO_PKG_VERSION")))
                .build(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Request the resource and parse the body.
    pub async fn load(&self) -> Result<Vec<Sample>, LoadError> {
        debug!(url = %self.url, "fetching latency resource");
        let client = self.client.clone();
        let url = self.url.clone();
        let description = self.description.clone();

        let body = tokio::task::spawn_blocking(move || request(&client, &url, &description))
            .await
            .map_err(|e| LoadError::Task {
                resource: self.description.clone(),
                message: e.to_string(),
            })??;

        decode(&self.description, &body)
    }
}

fn request(client: &ureq::Agent, url: &Url, description: &str) -> Result<Vec<u8>, LoadError> {
    let response = client.get(url.as_str()).call()?;
    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|source| LoadError::Io {
            resource: description.to_string(),
            source,
        })?;
    Ok(body)
}
