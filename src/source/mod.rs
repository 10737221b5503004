//! Resource loading for latency data.
//!
//! A resource URI is resolved into a [`Resource`] and loaded with a single
//! awaited call:
//!
//! - plain paths and `file://` URLs go through [`FileSource`]
//! - `http://` and `https://` URLs go through [`HttpSource`]
//! - `-` reads standard input via [`read_stream`]
//!
//! # Example
//!
//! ```no_run
//! use latency_scatter::source::load;
//!
//! # tokio_test::block_on(async {
//! match load("latencies.json").await {
//!     Ok(samples) => println!("{} samples", samples.len()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! # });
//! ```

mod file;
mod http;
mod pending;
mod stream;

pub use file::FileSource;
pub use http::HttpSource;
pub use pending::PendingLoad;
pub use stream::read_stream;

use tracing::debug;
use url::Url;

use crate::data::Sample;
use crate::error::LoadError;

/// A latency resource resolved from its URI.
#[derive(Debug, Clone)]
pub enum Resource {
    File(FileSource),
    Http(HttpSource),
    Stdin,
}

impl Resource {
    /// Resolve a URI or path.
    pub fn parse(uri: &str) -> Result<Self, LoadError> {
        let uri = uri.trim();
        let invalid = |reason: String| LoadError::InvalidUri {
            uri: uri.to_string(),
            reason,
        };

        if uri.is_empty() {
            return Err(invalid("empty resource".to_string()));
        }
        if uri == "-" {
            return Ok(Resource::Stdin);
        }
        if !uri.contains("://") {
            return Ok(Resource::File(FileSource::new(uri)));
        }

        let url = Url::parse(uri).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(Resource::Http(HttpSource::new(url))),
            "file" => url
                .to_file_path()
                .map(|path| Resource::File(FileSource::new(path)))
                .map_err(|_| invalid("file URL has no local path".to_string())),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }

    /// Human-readable description, used in logs and the status bar.
    pub fn description(&self) -> String {
        match self {
            Resource::File(source) => source.description().to_string(),
            Resource::Http(source) => source.description().to_string(),
            Resource::Stdin => "stdin".to_string(),
        }
    }

    /// Fetch and parse the resource.
    pub async fn load(&self) -> Result<Vec<Sample>, LoadError> {
        let samples = match self {
            Resource::File(source) => source.load().await?,
            Resource::Http(source) => source.load().await?,
            Resource::Stdin => read_stream(tokio::io::stdin(), "stdin").await?,
        };
        debug!(resource = %self.description(), samples = samples.len(), "loaded latency samples");
        Ok(samples)
    }
}

/// Resolve `uri` and load it.
pub async fn load(uri: &str) -> Result<Vec<Sample>, LoadError> {
    Resource::parse(uri)?.load().await
}

/// Parse a JSON array of `[timestamp, latency]` pairs.
pub fn decode(resource: &str, bytes: &[u8]) -> Result<Vec<Sample>, LoadError> {
    serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
        resource: resource.to_string(),
        source,
    })
}
