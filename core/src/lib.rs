//! Core components for signing key-value store API requests.
//!
//! This crate provides the foundational pieces shared by the kvsign
//! signers: a typed error, hashing helpers, UTC time formatting and
//! secret redaction.
//!
//! ## Example
//!
//! ```
//! use kvsign_core::hash::{hex_sha256, EMPTY_SHA256};
//! use kvsign_core::time::{format_date, parse_iso8601};
//!
//! # fn main() -> kvsign_core::Result<()> {
//! let t = parse_iso8601("20150830T123600Z")?;
//! assert_eq!(format_date(t), "20150830");
//! assert_eq!(hex_sha256(b""), EMPTY_SHA256);
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
