//! Domain models for the certificate feed binary.
//!
//! This module groups the core data type and the concurrent generator:
//! - `certificate_update` — immutable quote record and encoding helpers.
//! - `batch_producer` — multi-threaded fixed-size batch generation.

pub mod batch_producer;
pub mod certificate_update;
