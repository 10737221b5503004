//! Stream-based latency source.
//!
//! Reads a whole JSON document from any async reader. The binary uses this
//! for `-` (stdin); tests use in-memory cursors.

use tokio::io::{AsyncRead, AsyncReadExt};

use super::decode;
use crate::data::Sample;
use crate::error::LoadError;

/// Read `reader` to the end and parse it as a latency array.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use latency_scatter::source::read_stream;
///
/// # tokio_test::block_on(async {
/// let data = Cursor::new(b"[[0, 1000000]]".to_vec());
/// let samples = read_stream(data, "example").await.unwrap();
/// assert_eq!(samples.len(), 1);
/// # });
/// ```
pub async fn read_stream<R>(mut reader: R, description: &str) -> Result<Vec<Sample>, LoadError>
where
    R: AsyncRead + Unpin,
{
    let mut body = Vec::new();
    reader
        .read_to_end(&mut body)
        .await
        .map_err(|source| LoadError::Io {
            resource: description.to_string(),
            source,
        })?;
    decode(description, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn test_read_stream_parses_samples() {
        let cursor = Cursor::new(b"[[1, 2], [3, 4]]".to_vec());
        let samples = read_stream(cursor, "stdin").await.unwrap();
        assert_eq!(samples, vec![Sample::new(1, 2), Sample::new(3, 4)]);
    }

    #[tokio::test]
    async fn test_read_stream_empty_input_is_parse_error() {
        let cursor = Cursor::new(Vec::new());
        let err = read_stream(cursor, "stdin").await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
