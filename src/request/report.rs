use std::fmt;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};

use crate::error::RequestError;

/// Per-row result of one request attempt.
///
/// `Failure` carries nothing: a 404, a refused connection and an expired
/// timeout all collapse to the same absent marker at the column level.
/// Callers that need the discarded detail read the surrounding
/// [`FetchReport`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    Success(String),
    Failure,
}

impl ResponseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseOutcome::Success(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            ResponseOutcome::Success(text) => Some(text),
            ResponseOutcome::Failure => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            ResponseOutcome::Success(text) => Some(text),
            ResponseOutcome::Failure => None,
        }
    }
}

/// Wall-clock window of one request attempt.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    pub started_at: SystemTime,
    pub finished_at: SystemTime,
    pub elapsed: Duration,
}

impl RequestMeta {
    pub(crate) fn capture(started_at: SystemTime) -> Self {
        let finished_at = SystemTime::now();
        let elapsed = finished_at
            .duration_since(started_at)
            .unwrap_or(Duration::from_secs(0));
        Self {
            started_at,
            finished_at,
            elapsed,
        }
    }

    pub(crate) fn empty() -> Self {
        let now = SystemTime::now();
        Self {
            started_at: now,
            finished_at: now,
            elapsed: Duration::from_secs(0),
        }
    }
}

impl fmt::Display for RequestMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({:.4}s)",
            format_datetime(self.started_at),
            format_datetime(self.finished_at),
            self.elapsed.as_secs_f64()
        )
    }
}

fn format_datetime(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Full record of one request attempt: the collapsed outcome plus the status
/// code, error detail and timing that the column surface throws away.
#[derive(Debug, Clone)]
pub struct FetchReport {
    pub outcome: ResponseOutcome,
    pub status: Option<u16>,
    pub error: Option<RequestError>,
    pub meta: RequestMeta,
}

impl FetchReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn into_text(self) -> Option<String> {
        self.outcome.into_text()
    }

    /// Report for a request that never reached the transport, e.g. when the
    /// batch client could not be built.
    pub(crate) fn failed_before_send(error: RequestError) -> Self {
        Self {
            outcome: ResponseOutcome::Failure,
            status: None,
            error: Some(error),
            meta: RequestMeta::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_collapses_to_its_text() {
        let outcome = ResponseOutcome::Success("ok".to_string());
        assert!(outcome.is_success());
        assert_eq!(outcome.text(), Some("ok"));
        assert_eq!(outcome.into_text(), Some("ok".to_string()));
    }

    #[test]
    fn failure_collapses_to_absent() {
        assert!(!ResponseOutcome::Failure.is_success());
        assert_eq!(ResponseOutcome::Failure.into_text(), None);
    }

    #[test]
    fn pre_send_failure_keeps_its_error() {
        let report = FetchReport::failed_before_send(RequestError::Proxy("bad proxy".into()));
        assert!(!report.is_success());
        assert_eq!(report.status, None);
        assert!(matches!(report.error, Some(RequestError::Proxy(_))));
        assert_eq!(report.meta.elapsed, Duration::from_secs(0));
    }
}
