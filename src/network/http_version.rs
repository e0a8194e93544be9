use std::fmt;
use std::str::FromStr;

use reqwest::ClientBuilder;
use thiserror::Error;

/// HTTP protocol selection for the batch client.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HttpVersion {
    /// Negotiate automatically (default).
    #[default]
    Auto,
    /// HTTP/1.1 only.
    Http1Only,
    /// Prefer HTTP/2, fall back to HTTP/1.1.
    Http2,
    /// Force HTTP/2 with no fallback.
    Http2PriorKnowledge,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid HTTP version: '{0}'. Valid values: AUTO, HTTP1_ONLY, HTTP2, HTTP2_PRIOR_KNOWLEDGE")]
pub struct InvalidHttpVersion(pub String);

impl FromStr for HttpVersion {
    type Err = InvalidHttpVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AUTO" | "" => Ok(HttpVersion::Auto),
            "HTTP1" | "HTTP1.1" | "HTTP1_ONLY" => Ok(HttpVersion::Http1Only),
            "HTTP2" => Ok(HttpVersion::Http2),
            "HTTP2_PRIOR_KNOWLEDGE" | "FORCE_HTTP2" | "HTTP2_ONLY" => {
                Ok(HttpVersion::Http2PriorKnowledge)
            }
            _ => Err(InvalidHttpVersion(s.to_string())),
        }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpVersion::Auto => "AUTO",
            HttpVersion::Http1Only => "HTTP1_ONLY",
            HttpVersion::Http2 => "HTTP2",
            HttpVersion::Http2PriorKnowledge => "HTTP2_PRIOR_KNOWLEDGE",
        };
        write!(f, "{s}")
    }
}

impl HttpVersion {
    pub fn supports_http2(&self) -> bool {
        !matches!(self, HttpVersion::Http1Only)
    }

    pub(crate) fn apply_to_builder(&self, builder: ClientBuilder) -> ClientBuilder {
        match self {
            HttpVersion::Auto => builder,
            HttpVersion::Http1Only => builder.http1_only(),
            HttpVersion::Http2 => builder,
            HttpVersion::Http2PriorKnowledge => builder.http2_prior_knowledge(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_usual_spellings() {
        assert_eq!("auto".parse::<HttpVersion>().unwrap(), HttpVersion::Auto);
        assert_eq!("".parse::<HttpVersion>().unwrap(), HttpVersion::Auto);
        assert_eq!(
            "http1.1".parse::<HttpVersion>().unwrap(),
            HttpVersion::Http1Only
        );
        assert_eq!("HTTP2".parse::<HttpVersion>().unwrap(), HttpVersion::Http2);
        assert_eq!(
            "force_http2".parse::<HttpVersion>().unwrap(),
            HttpVersion::Http2PriorKnowledge
        );
    }

    #[test]
    fn rejects_unknown_versions() {
        let err = "HTTP3".parse::<HttpVersion>().unwrap_err();
        assert_eq!(err, InvalidHttpVersion("HTTP3".to_string()));
    }

    #[test]
    fn http1_only_disables_h2() {
        assert!(!HttpVersion::Http1Only.supports_http2());
        assert!(HttpVersion::Http2PriorKnowledge.supports_http2());
    }
}
