//! colfetch: row-wise HTTP fetch over columns of URLs.
//!
//! An ordered column of URL strings goes in; an ordered column of response
//! bodies comes out, one GET or POST per row, with `None` marking rows whose
//! request failed. The blocking entry points live in [`column`]
//! (`get`/`post` sequential, `aget`/`apost` concurrent); async callers use
//! [`fetch_requests`] directly and get the full per-row [`FetchReport`]
//! including status code, error detail and timing.
//!
//! ```no_run
//! let urls = vec![
//!     "https://example.com/1".to_string(),
//!     "https://example.com/2".to_string(),
//! ];
//! let bodies = colfetch::aget(&urls, None, None)?;
//! assert_eq!(bodies.len(), urls.len());
//! # Ok::<(), colfetch::ShapeMismatch>(())
//! ```

pub mod column;
pub mod debug;
pub mod error;
pub mod network;
pub mod request;

pub use column::{aget, apost, get, post};
pub use debug::set_debug;
pub use error::{RequestError, ShapeMismatch};
pub use network::{ClientConfig, HttpVersion, ProxyConfig};
pub use request::{
    execute_concurrent, execute_sequential, execute_single_request, fetch_requests,
    resolve_records, FetchMode, FetchReport, QueryParams, RequestMethod, RequestRecord,
    ResponseOutcome,
};

use std::future::Future;

use once_cell::sync::Lazy;
use tokio::runtime::{Builder, Runtime};

// Process-wide runtime for the blocking column operations, built once and
// reused across calls. All in-flight requests multiplex on a single thread.
static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create fetch runtime")
});

pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}
