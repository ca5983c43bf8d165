//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Processing statistics tracking (errors and info metrics)
//! - Retry strategy configuration
//!
//! Failures are scoped: a failure local to one record type degrades to an
//! ERROR-status record, a failure local to one domain skips that domain, and
//! only input-acquisition failures end the run.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_domain_error, get_retry_strategy};
pub use stats::ProcessingStats;
pub use types::{DomainError, ErrorType, InfoType, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        // All error types should be initialized to 0
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        // All info types should be initialized to 0
        for info_type in InfoType::iter() {
            assert_eq!(stats.get_info_count(info_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::NameConversionError);
        assert_eq!(stats.get_error_count(ErrorType::NameConversionError), 1);

        stats.increment_info(InfoType::DanglingDetected);
        assert_eq!(stats.get_info_count(InfoType::DanglingDetected), 1);
    }

    #[test]
    fn test_processing_stats_multiple_increments() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::DomainDeadlineExceeded);
        stats.increment_error(ErrorType::DomainDeadlineExceeded);
        stats.increment_error(ErrorType::DomainDeadlineExceeded);
        assert_eq!(stats.get_error_count(ErrorType::DomainDeadlineExceeded), 3);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::NameConversionError);
        stats.increment_error(ErrorType::ResolverError);
        stats.increment_info(InfoType::WildcardDetected);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_info(), 1);
    }
}
