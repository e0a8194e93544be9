use futures::future::{select_all, BoxFuture};
use futures::FutureExt;
use reqwest::Client;

use crate::network::{build_client, ClientConfig};
use crate::request::executor::execute_single_request;
use crate::request::method::RequestMethod;
use crate::request::record::RequestRecord;
use crate::request::report::FetchReport;

/// How a batch walks its rows: all at once, or strictly one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FetchMode {
    #[default]
    Concurrent,
    Sequential,
}

/// Run one batch of resolved records and collect a report per row.
///
/// One client (and with it one connection pool) is built per invocation and
/// dropped when the batch completes. If the client cannot be built at all,
/// every row gets a pre-send failure report instead.
pub async fn fetch_requests(
    records: Vec<RequestRecord>,
    method: RequestMethod,
    mode: FetchMode,
    config: &ClientConfig,
) -> Vec<FetchReport> {
    let client = match build_client(config) {
        Ok(client) => client,
        Err(err) => {
            return records
                .iter()
                .map(|_| FetchReport::failed_before_send(err.clone()))
                .collect()
        }
    };

    match mode {
        FetchMode::Concurrent => execute_concurrent(records, method, client).await,
        FetchMode::Sequential => execute_sequential(records, method, client).await,
    }
}

/// Launch every request at once, in row order, and suspend until the last
/// one reaches a terminal state. No cancellation, no retry, no partial
/// results: a row that fails never disturbs its siblings.
pub async fn execute_concurrent(
    records: Vec<RequestRecord>,
    method: RequestMethod,
    client: Client,
) -> Vec<FetchReport> {
    let total = records.len();

    let request_futures: Vec<BoxFuture<'static, (usize, FetchReport)>> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let client = client.clone();
            async move { (index, execute_single_request(record, method, &client).await) }.boxed()
        })
        .collect();

    // Each report lands at its own row index, never in completion order.
    let mut results: Vec<Option<FetchReport>> = vec![None; total];
    let mut remaining = request_futures;

    while !remaining.is_empty() {
        let ((index, report), _completed, rest) = select_all(remaining).await;
        results[index] = Some(report);
        remaining = rest;
    }

    results.into_iter().map(|slot| slot.unwrap()).collect()
}

/// One request at a time, in row order; row `i` is fully settled before row
/// `i + 1` is issued.
pub async fn execute_sequential(
    records: Vec<RequestRecord>,
    method: RequestMethod,
    client: Client,
) -> Vec<FetchReport> {
    let mut results = Vec::with_capacity(records.len());
    for record in records {
        results.push(execute_single_request(record, method, &client).await);
    }
    results
}
