//! AWS SigV4 signer for key-value store requests.
//!
//! The pipeline is split into pure steps that can be used on their own:
//!
//! 1. [`CanonicalRequest`] normalizes the request and hashes it.
//! 2. [`credential_scope`] and [`scope`] format the date/region/service scope.
//! 3. [`string_to_sign`] builds the exact bytes that get signed.
//! 4. [`SigningKey::derive`] runs the four stage HMAC chain.
//! 5. [`SigningKey::sign`] computes the hex signature.
//! 6. [`authorization_header`] formats the `Authorization` value.
//!
//! [`RequestSigner`] drives all of them in order.
//!
//! ## Example
//!
//! ```
//! use http::Method;
//! use kvsign_aws_v4::{Credential, RequestDescription, RequestSigner, SigningContext};
//! use kvsign_core::time::parse_iso8601;
//!
//! # fn main() -> kvsign_core::Result<()> {
//! let req = RequestDescription::new(Method::POST)
//!     .with_header("x-amz-target", "DynamoDB_20120810.GetItem")
//!     .with_body(r#"{"TableName":"users"}"#);
//! let cred = Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY");
//! let ctx = SigningContext::new("us-east-1", "dynamodb", parse_iso8601("20150830T123600Z")?);
//!
//! let output = RequestSigner::new().sign(&req, &cred, &ctx)?;
//! assert_eq!(
//!     output.signed_headers,
//!     vec!["content-type", "host", "x-amz-date", "x-amz-target"]
//! );
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod authorization;
pub use authorization::authorization_header;

mod canonical_request;
pub use canonical_request::{
    canonical_request_hash, canonicalize_query, normalize_header_value, CanonicalRequest,
};

mod constants;
pub use constants::{ALGORITHM, DEFAULT_CONTENT_TYPE, UNSIGNED_HEADERS};

mod context;
pub use context::SigningContext;

mod credential;
pub use credential::Credential;

mod request;
pub use request::RequestDescription;

mod scope;
pub use scope::{credential_scope, scope, string_to_sign};

mod sign_request;
pub use sign_request::{endpoint_host, RequestSigner, SigningOutput};

mod signing_key;
pub use signing_key::SigningKey;
