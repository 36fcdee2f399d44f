use bytes::Bytes;
use http::request::Parts;
use http::Method;
use kvsign_core::Result;

/// Description of the HTTP request to be signed.
///
/// Header names keep the caller's spelling; they are compared without
/// regard to case and folded to lowercase only while canonicalizing.
#[derive(Debug, Clone)]
pub struct RequestDescription {
    /// HTTP method.
    pub method: Method,
    /// URI path, `/` when absent. Must already be percent-encoded.
    pub path: Option<String>,
    /// Raw query string without the leading `?`.
    pub query: Option<String>,
    /// HTTP headers in insertion order.
    pub headers: Vec<(String, String)>,
    /// Request body, empty when absent.
    pub body: Option<Bytes>,
}

impl RequestDescription {
    /// Create a new request description with the given method.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            path: None,
            query: None,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Set the URI path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the raw query string.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request body, either bytes or UTF-8 text.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Get the first value of a header, compared case-insensitively.
    ///
    /// Names match the way they are canonicalized, surrounding whitespace
    /// ignored.
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.headers
            .iter()
            .find(|(k, _)| k.trim().eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Check if a header is present, compared case-insensitively.
    #[inline]
    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    /// Get body bytes, empty if absent.
    #[inline]
    pub fn body_bytes(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }

    /// Build a request description from `http::request::Parts`.
    ///
    /// The URI authority becomes the `host` header when the request carries
    /// none. Header values that are not visible ASCII text are rejected.
    pub fn from_parts(parts: &Parts, body: impl Into<Bytes>) -> Result<Self> {
        let mut headers = Vec::with_capacity(parts.headers.len() + 1);
        for (name, value) in parts.headers.iter() {
            headers.push((name.as_str().to_string(), value.to_str()?.to_string()));
        }

        if !parts.headers.contains_key(http::header::HOST) {
            if let Some(authority) = parts.uri.authority() {
                headers.push((http::header::HOST.as_str().to_string(), authority.to_string()));
            }
        }

        let path = match parts.uri.path() {
            "" => None,
            v => Some(v.to_string()),
        };

        Ok(Self {
            method: parts.method.clone(),
            path,
            query: parts.uri.query().map(|v| v.to_string()),
            headers,
            body: Some(body.into()),
        })
    }
}
