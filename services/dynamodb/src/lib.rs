//! Signed DynamoDB request assembly.
//!
//! This crate turns typed item requests into `http::Request` values signed
//! with SigV4. It performs no I/O: pick any transport to send them.
//!
//! ## Example
//!
//! ```
//! use kvsign_aws_v4::Credential;
//! use kvsign_core::time::now;
//! use kvsign_dynamodb::{Client, GetItemInput, KeyValues, Region, Table};
//!
//! fn main() -> kvsign_core::Result<()> {
//!     let client = Client::new(
//!         Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY"),
//!         Region::UsEast1,
//!     )?;
//!
//!     let table = Table::new("users", "id");
//!     let req = GetItemInput::new(&table, &KeyValues::new("42"))?.into();
//!
//!     let signed = client.prepare(&req, now())?;
//!     assert!(signed.headers().contains_key("authorization"));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod region;
pub use region::Region;

mod operation;
pub use operation::Operation;

mod model;
pub use model::AttributeValue;
pub use model::DeleteItemInput;
pub use model::GetItemInput;
pub use model::Item;
pub use model::ItemRequest;
pub use model::KeyValues;
pub use model::PutItemInput;
pub use model::ReturnValue;
pub use model::Table;

mod client;
pub use client::Client;
pub use client::SERVICE;
