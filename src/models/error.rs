// Error taxonomy for the share pipeline
// Resolution failures degrade to the next tier; only classification,
// encoding and sink failures abort the request

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShareError {
    /// No attachment matched a known kind, or the matched value failed to cast
    #[error("no usable payload in share request")]
    PayloadUnavailable,

    /// Timeout, connection error or non-success status from a fetch
    #[error("network fetch failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not the JSON shape we expected
    #[error("response parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The assembled deep link did not survive URL validation
    #[error("deep link encoding failed")]
    Encoding,

    /// The ingest sink could not take the deep link
    #[error("ingest sink delivery failed: {0}")]
    Sink(String),
}
