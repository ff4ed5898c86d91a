//!
//! Common types and utilities shared across the certificate feed workspace.
//!
//! This crate aggregates:
//! - `error` — unified error type `FeedError` used across the workspace.
//! - `result` — handy `Result<T, FeedError>` alias.
//! - `country` — ISIN country-code prefixes and parsing helpers.
//! - `isin` — ISIN generation and check-digit computation.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod country;
pub mod isin;

pub use error::FeedError;
pub use result::Result;
pub use country::CountryCode;
