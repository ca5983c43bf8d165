//! Error type definitions.
//!
//! This module defines all error and diagnostic types used throughout the
//! application.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The configured resolver address could not be parsed or resolved.
    #[error("Invalid resolver address '{addr}': {reason}")]
    ResolverAddrError {
        /// The address as given on the command line.
        addr: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// A failure scoped to a single domain.
///
/// A `DomainError` skips that domain entirely; the pipeline continues with
/// the remaining domains. Failures scoped to a single record type never
/// surface here -- they degrade to an ERROR-status record instead.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The input name could not be converted to its ASCII/Punycode query form.
    #[error("'{0}' is not a valid internationalized domain name")]
    InvalidName(String),

    /// The resolver failed for the whole domain (used by injected resolvers;
    /// the built-in client degrades per-record-type instead).
    #[error("resolver failure: {0}")]
    Resolver(String),
}

/// Types of errors that can occur while scanning domains.
///
/// This enum categorizes actual error conditions - failures that remove a
/// domain from the result stream or prevent a result from being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Input name failed ASCII/Punycode conversion.
    NameConversionError,
    /// The per-domain deadline expired before resolution completed.
    DomainDeadlineExceeded,
    /// The resolver failed at the domain level.
    ResolverError,
    /// A completed outcome could not be written to the output stream.
    OutputWriteError,
}

/// Types of informational metrics tracked during a scan.
///
/// Info metrics track notable findings and input conditions that are not
/// errors, such as dangling CNAMEs or dropped duplicate input lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A domain was flagged as a potential dangling CNAME.
    DanglingDetected,
    /// A domain's zone answered a random-subdomain probe.
    WildcardDetected,
    /// A duplicate input domain was silently dropped.
    DuplicateDropped,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::NameConversionError => "Domain name conversion error",
            ErrorType::DomainDeadlineExceeded => "Per-domain deadline exceeded",
            ErrorType::ResolverError => "Domain resolution error",
            ErrorType::OutputWriteError => "Output write error",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::DanglingDetected => "Potential dangling CNAME",
            InfoType::WildcardDetected => "Wildcard DNS detected",
            InfoType::DuplicateDropped => "Duplicate input dropped",
        }
    }
}
