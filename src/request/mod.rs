pub mod concurrency;
pub mod executor;
pub mod method;
pub mod record;
pub mod report;

pub use concurrency::{execute_concurrent, execute_sequential, fetch_requests, FetchMode};
pub use executor::execute_single_request;
pub use method::RequestMethod;
pub use record::{resolve_records, QueryParams, RequestRecord};
pub use report::{FetchReport, RequestMeta, ResponseOutcome};
