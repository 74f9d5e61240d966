//! Typed Rust client for a bulk-SMS HTTP gateway.
//!
//! The gateway takes a form-encoded POST (`username`, `password`, `number`, `message`)
//! and answers with a `|`-delimited string whose first field is a numeric status code.
//! The crate has a domain layer of small types (including the fixed status table), a
//! transport layer for the wire format, settings loading, and a client orchestrating
//! the single round trip.
//!
//! ```rust,no_run
//! use bulksms::{BulkSmsClient, GatewayConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bulksms::BulkSmsError> {
//!     let config = GatewayConfig::load()?;
//!     let client = BulkSmsClient::from_config(&config)?;
//!     let result = client.send("01711111111,01811111111", "hello").await?;
//!     println!("{result}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod settings;
mod transport;

pub use client::{BulkSmsClient, BulkSmsClientBuilder, BulkSmsError};
pub use domain::{
    GatewayUrl, KnownStatusCode, MessageText, Password, Recipients, SendOutcome, SendRequest,
    StatusCode, Username, ValidationError,
};
pub use settings::GatewayConfig;
