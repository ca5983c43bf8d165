//! Data model for resolved DNS record sets.

use std::collections::HashMap;
use std::fmt;

use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::RecordType;
use serde::{Serialize, Serializer};

/// The fixed battery of record types queried for every domain, in query order.
///
/// The order is deterministic so diagnostic output lines up with query order.
pub const RECORD_BATTERY: [RecordType; 9] = [
    RecordType::A,
    RecordType::AAAA,
    RecordType::CNAME,
    RecordType::NS,
    RecordType::MX,
    RecordType::TXT,
    RecordType::SOA,
    RecordType::SRV,
    RecordType::CAA,
];

/// Classification of a completed DNS exchange.
///
/// Mirrors the resolver's response code for completed exchanges; `Error`
/// marks exchanges that never completed (timeouts, network failures) after
/// all retries. Any status other than `NoError` carries no authoritative data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    NoError,
    NxDomain,
    ServFail,
    Refused,
    Error,
    /// Any other resolver status code, carried as its canonical token.
    Other(String),
}

impl RecordStatus {
    /// Returns the canonical wire token for this status.
    pub fn as_str(&self) -> &str {
        match self {
            RecordStatus::NoError => "NOERROR",
            RecordStatus::NxDomain => "NXDOMAIN",
            RecordStatus::ServFail => "SERVFAIL",
            RecordStatus::Refused => "REFUSED",
            RecordStatus::Error => "ERROR",
            RecordStatus::Other(code) => code,
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<ResponseCode> for RecordStatus {
    fn from(code: ResponseCode) -> Self {
        match code {
            ResponseCode::NoError => RecordStatus::NoError,
            ResponseCode::NXDomain => RecordStatus::NxDomain,
            ResponseCode::ServFail => RecordStatus::ServFail,
            ResponseCode::Refused => RecordStatus::Refused,
            // The remaining rcodes are rare enough to carry by name only.
            other => RecordStatus::Other(format!("{other:?}").to_uppercase()),
        }
    }
}

/// The result of a single DNS record-type query.
#[derive(Debug, Clone, Serialize)]
pub struct RecordResult {
    /// Record type tag ("A", "CNAME", ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Decoded answer values in server answer order.
    pub values: Vec<String>,
    /// Seconds-to-live of the last-seen answer record.
    pub ttl: u32,
    /// Classification of the exchange.
    pub status: RecordStatus,
    /// Diagnostic text for exchanges that never completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecordResult {
    /// Creates an empty result for `record_type` with the given status.
    pub fn empty(record_type: RecordType, status: RecordStatus) -> Self {
        RecordResult {
            record_type: record_type.to_string(),
            values: Vec::new(),
            ttl: 0,
            status,
            error: None,
        }
    }
}

/// Aggregate resolution results for one domain.
///
/// Built by a single worker, populated once by sequential per-type queries,
/// then handed off by value; never shared across tasks while mutable.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionResult {
    /// The input domain name.
    pub domain: String,
    /// One entry per requested record type, keyed by type tag.
    pub records: HashMap<String, RecordResult>,
    /// Convenience copy of the analyzer's dangling verdict.
    pub is_dangling: bool,
    /// Whether a random-subdomain probe resolved for this zone.
    pub has_wildcard: bool,
    /// Decoded NS values, when the zone returned any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
}

impl ResolutionResult {
    /// Creates an empty result set for `domain`.
    pub fn new(domain: impl Into<String>) -> Self {
        ResolutionResult {
            domain: domain.into(),
            records: HashMap::new(),
            is_dangling: false,
            has_wildcard: false,
            nameservers: None,
        }
    }

    /// Looks up the result for a record type tag ("A", "CNAME", ...).
    pub fn record(&self, tag: &str) -> Option<&RecordResult> {
        self.records.get(tag)
    }
}
