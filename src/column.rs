//! Column-level fetch operations.
//!
//! Each function maps an ordered column of URLs to an ordered column of
//! response bodies of the same length, one request per row. `get`/`post`
//! walk the rows strictly one at a time; `aget`/`apost` launch every row at
//! once and restore row order when collecting. A row whose request fails in
//! any way (non-success status, network error, timeout) comes back as
//! `None`; only a mis-shaped input column is an error.
//!
//! These block on the process-wide runtime and must not be called from
//! inside an async context; async callers use
//! [`fetch_requests`](crate::request::fetch_requests) directly, which also
//! exposes the per-row status and error detail the column surface discards.

use std::time::Duration;

use serde_json::Value;

use crate::error::ShapeMismatch;
use crate::network::ClientConfig;
use crate::request::concurrency::{fetch_requests, FetchMode};
use crate::request::method::RequestMethod;
use crate::request::record::{resolve_records, QueryParams};
use crate::request::report::FetchReport;

/// Sequential GET per row.
pub fn get(
    urls: &[String],
    params: Option<&[Option<QueryParams>]>,
    timeout: Option<Duration>,
) -> Result<Vec<Option<String>>, ShapeMismatch> {
    run(urls, params, None, timeout, RequestMethod::Get, FetchMode::Sequential)
}

/// Concurrent GET per row.
pub fn aget(
    urls: &[String],
    params: Option<&[Option<QueryParams>]>,
    timeout: Option<Duration>,
) -> Result<Vec<Option<String>>, ShapeMismatch> {
    run(urls, params, None, timeout, RequestMethod::Get, FetchMode::Concurrent)
}

/// Sequential POST per row, with an optional JSON body column.
pub fn post(
    urls: &[String],
    params: Option<&[Option<QueryParams>]>,
    bodies: Option<&[Option<Value>]>,
    timeout: Option<Duration>,
) -> Result<Vec<Option<String>>, ShapeMismatch> {
    run(urls, params, bodies, timeout, RequestMethod::Post, FetchMode::Sequential)
}

/// Concurrent POST per row, with an optional JSON body column.
pub fn apost(
    urls: &[String],
    params: Option<&[Option<QueryParams>]>,
    bodies: Option<&[Option<Value>]>,
    timeout: Option<Duration>,
) -> Result<Vec<Option<String>>, ShapeMismatch> {
    run(urls, params, bodies, timeout, RequestMethod::Post, FetchMode::Concurrent)
}

fn run(
    urls: &[String],
    params: Option<&[Option<QueryParams>]>,
    bodies: Option<&[Option<Value>]>,
    timeout: Option<Duration>,
    method: RequestMethod,
    mode: FetchMode,
) -> Result<Vec<Option<String>>, ShapeMismatch> {
    let records = resolve_records(urls, params, bodies, timeout)?;
    let reports = crate::block_on(fetch_requests(
        records,
        method,
        mode,
        &ClientConfig::default(),
    ));
    Ok(reports.into_iter().map(FetchReport::into_text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shape errors abort before any request is issued, so no server is
    // needed here.
    #[test]
    fn mismatched_params_column_fails_fast() {
        let urls = vec![
            "http://127.0.0.1:1/a".to_string(),
            "http://127.0.0.1:1/b".to_string(),
            "http://127.0.0.1:1/c".to_string(),
        ];
        let params = vec![None, None];
        let err = aget(&urls, Some(&params), None).unwrap_err();
        assert_eq!(err.column, "params");
        assert_eq!(err.expected, 3);
        assert_eq!(err.actual, 2);
    }

    #[test]
    fn mismatched_body_column_fails_fast() {
        let urls = vec!["http://127.0.0.1:1/a".to_string()];
        let bodies = vec![];
        let err = post(&urls, None, Some(&bodies), None).unwrap_err();
        assert_eq!(err.column, "body");
    }
}
