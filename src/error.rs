use thiserror::Error;

/// Raised by the record resolver when a supplied column does not line up
/// with the URL column. Fatal: no request is issued for any row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("shape mismatch: `{column}` column has {actual} rows, url column has {expected}")]
pub struct ShapeMismatch {
    pub column: &'static str,
    pub expected: usize,
    pub actual: usize,
}

/// Per-request failure detail. Never propagated out of an executor; it only
/// survives inside the [`FetchReport`](crate::FetchReport) for callers that
/// want more than the absent marker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("HTTP status error: {0}")]
    Status(u16),

    #[error("request error: {0}")]
    Transport(String),

    #[error("request timeout after {0:.2} seconds")]
    TimedOut(f64),

    #[error("proxy configuration error: {0}")]
    Proxy(String),
}
