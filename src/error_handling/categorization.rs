//! Error categorization and retry strategy.
//!
//! This module provides the retry pacing used by the DNS client and the
//! mapping from domain-level errors to diagnostic categories.

use std::time::Duration;
use tokio_retry::strategy::FixedInterval;

use super::types::{DomainError, ErrorType};
use crate::config::RETRY_PAUSE_MS;

/// Creates the fixed-interval retry strategy for DNS query attempts.
///
/// Transport failures are retried after a brief fixed pause; there is no
/// exponential backoff because a scan prefers fast failure over politeness
/// to a single resolver.
///
/// # Arguments
///
/// * `retries` - Maximum retries after the initial attempt
///
/// # Returns
///
/// A retry strategy iterator ready for use with `tokio_retry::Retry`.
pub fn get_retry_strategy(retries: usize) -> impl Iterator<Item = Duration> {
    FixedInterval::from_millis(RETRY_PAUSE_MS).take(retries)
}

/// Categorizes a `DomainError` into an `ErrorType` for statistics tracking.
pub fn categorize_domain_error(error: &DomainError) -> ErrorType {
    match error {
        DomainError::InvalidName(_) => ErrorType::NameConversionError,
        DomainError::Resolver(_) => ErrorType::ResolverError,
    }
}
