//! DNS resolution and record querying.
//!
//! This module provides the resolution client used by the scan pipeline:
//! - A fixed battery of per-record-type queries via `hickory-resolver`
//! - Bounded retry with a fixed pause for transport failures
//! - Response status mapping (NOERROR, NXDOMAIN, SERVFAIL, ...)
//! - Answer decoding into presentation strings, preserving server order
//!
//! The pipeline consumes the client through the [`Resolve`] trait so tests
//! can inject a double without real network traffic.

mod client;
mod decode;
mod types;

// Re-export public API
pub use client::{DnsClient, Resolve};
pub use types::{RecordResult, RecordStatus, ResolutionResult, RECORD_BATTERY};
