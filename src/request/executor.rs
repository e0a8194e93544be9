use std::time::SystemTime;

use reqwest::Client;

use crate::debug::debug_log;
use crate::error::RequestError;
use crate::request::method::RequestMethod;
use crate::request::record::RequestRecord;
use crate::request::report::{FetchReport, RequestMeta, ResponseOutcome};

/// Issue one request and classify it.
///
/// A status in [200, 300) becomes `Success` with the body text; every other
/// terminal state (non-success status, transport error, expired timeout)
/// becomes `Failure`. Nothing is propagated: the detail lands in the report
/// and the caller's column sees only the absent marker.
pub async fn execute_single_request(
    record: RequestRecord,
    method: RequestMethod,
    client: &Client,
) -> FetchReport {
    let started_at = SystemTime::now();

    let mut builder = client.request(method.as_reqwest(), &record.url);

    if let Some(params) = &record.params {
        let pairs: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        builder = builder.query(&pairs);
    }

    if method == RequestMethod::Post {
        if let Some(body) = &record.body {
            builder = builder.json(body);
        }
    }

    // With no per-record deadline the request may wait on the transport
    // indefinitely; with one, the builder timeout and an outer clock both
    // bound it.
    let sent = match record.timeout {
        Some(limit) => {
            builder = builder.timeout(limit);
            match tokio::time::timeout(limit, builder.send()).await {
                Ok(sent) => sent,
                Err(_) => {
                    return FetchReport {
                        outcome: ResponseOutcome::Failure,
                        status: None,
                        error: Some(RequestError::TimedOut(limit.as_secs_f64())),
                        meta: RequestMeta::capture(started_at),
                    }
                }
            }
        }
        None => builder.send().await,
    };

    let (status, outcome, error) = match sent {
        Ok(res) => {
            let status = res.status();
            match res.text().await {
                Ok(text) => {
                    debug_log(method, &record.url, status, &text);
                    if status.is_success() {
                        (Some(status.as_u16()), ResponseOutcome::Success(text), None)
                    } else {
                        (
                            Some(status.as_u16()),
                            ResponseOutcome::Failure,
                            Some(RequestError::Status(status.as_u16())),
                        )
                    }
                }
                Err(e) => (
                    Some(status.as_u16()),
                    ResponseOutcome::Failure,
                    Some(RequestError::Transport(e.to_string())),
                ),
            }
        }
        Err(e) => {
            let error = if e.is_timeout() {
                RequestError::TimedOut(record.timeout.map(|t| t.as_secs_f64()).unwrap_or(0.0))
            } else {
                RequestError::Transport(e.to_string())
            };
            (None, ResponseOutcome::Failure, Some(error))
        }
    };

    FetchReport {
        outcome,
        status,
        error,
        meta: RequestMeta::capture(started_at),
    }
}
