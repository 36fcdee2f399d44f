use std::fmt;
use thiserror::Error;

/// Error returned by every signing step.
///
/// Errors carry a [`ErrorKind`] so callers can tell bad inputs apart from
/// failures inside the signer.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// Category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Body or header value can't be represented as bytes or UTF-8 text
    EncodingFailure,
    /// Access key id, secret access key or session token is empty
    MissingCredential,
    /// Region or service identifier is empty or unknown
    MissingContext,
    /// Header names equal after lowercasing carry different values
    AmbiguousHeader,
    /// Request can't be signed as described
    RequestInvalid,
    /// Anything else
    Unexpected,
}

impl ErrorKind {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EncodingFailure => "encoding failure",
            ErrorKind::MissingCredential => "missing credential",
            ErrorKind::MissingContext => "missing signing context",
            ErrorKind::AmbiguousHeader => "ambiguous header",
            ErrorKind::RequestInvalid => "invalid request",
            ErrorKind::Unexpected => "unexpected error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result alias used across kvsign.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an error of `kind`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Whether the caller's inputs caused this error.
    ///
    /// Signing the same inputs again fails the same way.
    pub fn is_input_error(&self) -> bool {
        self.kind != ErrorKind::Unexpected
    }

    /// [`ErrorKind::EncodingFailure`]
    pub fn encoding_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EncodingFailure, message)
    }

    /// [`ErrorKind::MissingCredential`]
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingCredential, message)
    }

    /// [`ErrorKind::MissingContext`]
    pub fn missing_context(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingContext, message)
    }

    /// [`ErrorKind::AmbiguousHeader`]
    pub fn ambiguous_header(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AmbiguousHeader, message)
    }

    /// [`ErrorKind::RequestInvalid`]
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// [`ErrorKind::Unexpected`]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

/// Map foreign errors onto a kind, keeping them as the source.
macro_rules! from_error {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl From<$ty> for Error {
                fn from(err: $ty) -> Self {
                    Self::new(ErrorKind::$kind, err.to_string()).with_source(err)
                }
            }
        )*
    };
}

from_error! {
    fmt::Error => Unexpected,
    std::str::Utf8Error => EncodingFailure,
    http::header::ToStrError => EncodingFailure,
    http::Error => RequestInvalid,
    http::header::InvalidHeaderName => RequestInvalid,
    http::header::InvalidHeaderValue => RequestInvalid,
    http::uri::InvalidUri => RequestInvalid,
}
