use reqwest::Client;

use crate::error::RequestError;
use crate::network::http_version::HttpVersion;
use crate::network::proxy_config::ProxyConfig;

const USER_AGENT: &str = concat!("colfetch/", env!("CARGO_PKG_VERSION"));

/// Settings for the client built once per batch invocation.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub proxy: Option<ProxyConfig>,
    pub http_version: HttpVersion,
    pub ssl_verify: bool,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            http_version: HttpVersion::Auto,
            ssl_verify: true,
            user_agent: None,
        }
    }
}

/// Build the per-batch client. Compressed bodies are decompressed
/// transparently. No client-level timeout is set: a record without its own
/// deadline waits on the transport for as long as the transport does.
pub(crate) fn build_client(config: &ClientConfig) -> Result<Client, RequestError> {
    let mut builder = Client::builder()
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .user_agent(config.user_agent.as_deref().unwrap_or(USER_AGENT));

    builder = config.http_version.apply_to_builder(builder);

    if !config.ssl_verify {
        builder = builder.danger_accept_invalid_certs(true);
    }

    if let Some(proxy) = &config.proxy {
        builder = proxy
            .apply_to_builder(builder)
            .map_err(|e| RequestError::Proxy(e.to_string()))?;
    }

    builder
        .build()
        .map_err(|e| RequestError::Transport(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        assert!(build_client(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn malformed_proxy_url_is_a_proxy_error() {
        let config = ClientConfig {
            proxy: Some(ProxyConfig::from_url("not a proxy url")),
            ..ClientConfig::default()
        };
        let err = build_client(&config).unwrap_err();
        assert!(matches!(err, RequestError::Proxy(_)));
    }
}
