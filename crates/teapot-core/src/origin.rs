//! Request origin: the trusted (scheme, host, port) anchor used to decide
//! whether a redirect target stays on the current application.

use thiserror::Error;
use url::Url;

/// Error building an [`Origin`] from caller input.
#[derive(Debug, Error)]
pub enum OriginError {
    #[error("invalid origin URL `{0}`")]
    Parse(String, #[source] url::ParseError),
    #[error("origin URL has no host: `{0}`")]
    MissingHost(String),
}

/// Scheme + host + optional explicit port of the current request.
///
/// The port is `None` when it is the scheme default; `url` normalises
/// `http://example.com:80/` down to no port, so `example.com` and
/// `example.com:80` compare equal for http.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
}

impl Origin {
    /// Construct from an absolute URL string.
    pub fn from_url(url: &str) -> Result<Self, OriginError> {
        let parsed = Url::parse(url).map_err(|e| OriginError::Parse(url.to_string(), e))?;

        let host = parsed
            .host_str()
            .ok_or_else(|| OriginError::MissingHost(url.to_string()))?
            .to_string();

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host,
            port: parsed.port(),
        })
    }

    /// Construct from an HTTP `Host` header value (`host` or `host:port`).
    /// The transport layer supplies the scheme.
    pub fn from_host_header(scheme: &str, host_header: &str) -> Option<Self> {
        // Let Url do the host/port split; it also handles IPv6 literals.
        Self::from_url(&format!("{scheme}://{host_header}/")).ok()
    }

    /// `host` or `host:port` — the same-origin comparison key.
    pub fn netloc(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }

    /// Absolute URL usable as a base when resolving relative references.
    pub fn base_url(&self) -> String {
        format!("{}://{}/", self.scheme, self.netloc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_url_with_explicit_port() {
        let origin = Origin::from_url("http://localhost:5000/hello?x=1").unwrap();
        assert_eq!(origin.scheme, "http");
        assert_eq!(origin.host, "localhost");
        assert_eq!(origin.port, Some(5000));
        assert_eq!(origin.netloc(), "localhost:5000");
        assert_eq!(origin.base_url(), "http://localhost:5000/");
    }

    #[test]
    fn default_port_is_dropped() {
        let origin = Origin::from_url("http://example.com:80/").unwrap();
        assert_eq!(origin.port, None);
        assert_eq!(origin.netloc(), "example.com");
    }

    #[test]
    fn from_host_header_splits_port() {
        let origin = Origin::from_host_header("http", "example.com:8080").unwrap();
        assert_eq!(origin.host, "example.com");
        assert_eq!(origin.port, Some(8080));
    }

    #[test]
    fn from_host_header_rejects_garbage() {
        assert!(Origin::from_host_header("http", "").is_none());
    }

    #[test]
    fn missing_host_is_an_error() {
        assert!(matches!(
            Origin::from_url("data:text/plain,hi"),
            Err(OriginError::MissingHost(_))
        ));
    }
}
