//! Error types for loading latency resources.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors that can occur while fetching, decoding or drawing a latency
/// resource.
///
/// Every variant fails the chart as a whole; individual samples are never
/// validated beyond their wire shape.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource URI could not be understood.
    #[error("Invalid resource '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// Reading a file or stdin failed.
    #[error("Read error for {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed or returned a non-success status.
    #[error("HTTP request for {resource} failed: {message}")]
    Http { resource: String, message: String },

    /// The body is not a JSON array of `[timestamp, latency]` pairs.
    #[error("Parse error for {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    /// The background fetch task did not complete.
    #[error("Fetch task for {resource} failed: {message}")]
    Task { resource: String, message: String },

    /// The plotting backend rejected a drawing operation.
    #[error("Failed to draw chart: {message}")]
    Draw { message: String },
}

impl LoadError {
    /// Short category name, used in the status bar.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::InvalidUri { .. } => "uri",
            LoadError::Io { .. } => "io",
            LoadError::Http { .. } => "http",
            LoadError::Parse { .. } => "parse",
            LoadError::Task { .. } => "task",
            LoadError::Draw { .. } => "draw",
        }
    }
}

impl From<ureq::Error> for LoadError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, response) => LoadError::Http {
                resource: response.get_url().to_string(),
                message: format!("status {}", code),
            },
            ureq::Error::Transport(transport) => LoadError::Http {
                resource: transport
                    .url()
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| "<unknown>".to_string()),
                message: transport.to_string(),
            },
        }
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for LoadError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        LoadError::Draw {
            message: err.to_string(),
        }
    }
}
