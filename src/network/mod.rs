pub mod client;
pub mod http_version;
pub mod proxy_config;

pub use client::ClientConfig;
pub(crate) use client::build_client;
pub use http_version::{HttpVersion, InvalidHttpVersion};
pub use proxy_config::ProxyConfig;
