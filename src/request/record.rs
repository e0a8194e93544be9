use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::error::ShapeMismatch;

/// Query parameters for one row, sent as URL-encoded key/value pairs.
pub type QueryParams = HashMap<String, String>;

/// One fully-resolved request, one per row. Built by [`resolve_records`] and
/// consumed by the executor that issues it.
#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub url: String,
    pub params: Option<QueryParams>,
    pub body: Option<Value>,
    pub timeout: Option<Duration>,
}

impl RequestRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: None,
            body: None,
            timeout: None,
        }
    }

    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Align the URL column with the optional per-row `params` and `bodies`
/// columns into one record per row.
///
/// A column passed as `None` defaults to all-absent; the timeout, when given,
/// applies uniformly to every record. Supplied columns must match the URL
/// column's length or the whole batch fails with [`ShapeMismatch`] before a
/// single request is issued. URLs are not validated here; a malformed URL
/// surfaces later as a transport failure on its own row.
pub fn resolve_records(
    urls: &[String],
    params: Option<&[Option<QueryParams>]>,
    bodies: Option<&[Option<Value>]>,
    timeout: Option<Duration>,
) -> Result<Vec<RequestRecord>, ShapeMismatch> {
    let expected = urls.len();

    if let Some(params) = params {
        if params.len() != expected {
            return Err(ShapeMismatch {
                column: "params",
                expected,
                actual: params.len(),
            });
        }
    }
    if let Some(bodies) = bodies {
        if bodies.len() != expected {
            return Err(ShapeMismatch {
                column: "body",
                expected,
                actual: bodies.len(),
            });
        }
    }

    Ok(urls
        .iter()
        .enumerate()
        .map(|(row, url)| RequestRecord {
            url: url.clone(),
            params: params.and_then(|p| p[row].clone()),
            body: bodies.and_then(|b| b[row].clone()),
            timeout,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("http://host/{i}")).collect()
    }

    #[test]
    fn short_params_column_is_a_shape_mismatch() {
        let params = vec![None, None];
        let err = resolve_records(&urls(3), Some(&params), None, None).unwrap_err();
        assert_eq!(
            err,
            ShapeMismatch {
                column: "params",
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn long_body_column_is_a_shape_mismatch() {
        let bodies = vec![None, Some(json!(1)), None];
        let err = resolve_records(&urls(2), None, Some(&bodies), None).unwrap_err();
        assert_eq!(err.column, "body");
        assert_eq!(err.expected, 2);
        assert_eq!(err.actual, 3);
    }

    #[test]
    fn omitted_columns_default_to_all_absent() {
        let records = resolve_records(&urls(3), None, None, None).unwrap();
        assert_eq!(records.len(), 3);
        for record in &records {
            assert!(record.params.is_none());
            assert!(record.body.is_none());
            assert!(record.timeout.is_none());
        }
    }

    #[test]
    fn rows_keep_their_own_params_and_bodies() {
        let params = vec![
            Some(QueryParams::from([("k".to_string(), "v".to_string())])),
            None,
        ];
        let bodies = vec![None, Some(json!({"row": 1}))];
        let records = resolve_records(&urls(2), Some(&params), Some(&bodies), None).unwrap();

        assert_eq!(records[0].url, "http://host/0");
        assert_eq!(
            records[0].params.as_ref().and_then(|p| p.get("k")).map(String::as_str),
            Some("v")
        );
        assert!(records[0].body.is_none());
        assert!(records[1].params.is_none());
        assert_eq!(records[1].body, Some(json!({"row": 1})));
    }

    #[test]
    fn timeout_applies_to_every_record() {
        let timeout = Duration::from_millis(250);
        let records = resolve_records(&urls(4), None, None, Some(timeout)).unwrap();
        assert!(records.iter().all(|r| r.timeout == Some(timeout)));
    }
}
