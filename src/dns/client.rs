//! The DNS resolution client.
//!
//! Issues one query per requested record type against a configured resolver,
//! with bounded retries, and aggregates the per-type results into a single
//! per-domain record set.

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::lookup::Lookup;
use hickory_resolver::proto::rr::{Name, RecordType};
use hickory_resolver::TokioAsyncResolver;
use tokio_retry::Retry;

use crate::error_handling::{get_retry_strategy, DomainError};

use super::decode::decode_rdata;
use super::types::{RecordResult, RecordStatus, ResolutionResult};

/// The resolution capability consumed by the scan pipeline.
///
/// The pipeline depends only on this contract, never on a concrete
/// transport, so a test double can stand in for real DNS without touching
/// any pipeline logic. The wildcard prober issues its probe through the
/// same contract with a single-type battery.
#[async_trait]
pub trait Resolve: Send + Sync {
    /// Resolves the requested record types for `domain`, sequentially and in
    /// the given order.
    ///
    /// Failures local to one record type degrade to an ERROR-status entry in
    /// the returned record set; an `Err` means the whole domain failed (bad
    /// name, resolver-level fault) and should be skipped.
    async fn resolve(
        &self,
        domain: &str,
        types: &[RecordType],
    ) -> Result<ResolutionResult, DomainError>;
}

/// DNS client backed by `hickory-resolver` against a single nameserver.
pub struct DnsClient {
    resolver: TokioAsyncResolver,
    retries: usize,
}

impl DnsClient {
    /// Creates a client querying `nameserver` over UDP.
    ///
    /// `timeout` bounds each query attempt; `retries` is the number of
    /// additional attempts after a transport failure. Retries are paced by
    /// this client, so the underlying resolver is configured not to retry
    /// on its own.
    pub fn new(nameserver: SocketAddr, timeout: Duration, retries: usize) -> Self {
        let mut config = ResolverConfig::new();
        config.add_name_server(NameServerConfig::new(nameserver, Protocol::Udp));

        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 0; // retries are handled by this client
        opts.ndots = 0; // never append search domains to scan targets

        DnsClient {
            resolver: TokioAsyncResolver::tokio(config, opts),
            retries,
        }
    }

    /// Queries one record type, retrying transport failures.
    ///
    /// An authoritative negative answer (NXDOMAIN, SERVFAIL, empty NOERROR)
    /// is a completed exchange and is never retried. Exhausted retries
    /// degrade to an ERROR-status result carrying the last error's text.
    async fn query(&self, name: &Name, record_type: RecordType) -> RecordResult {
        let attempt = || async {
            match self.resolver.lookup(name.clone(), record_type).await {
                Ok(lookup) => Ok(decode_answers(record_type, &lookup)),
                Err(e) => match e.kind() {
                    ResolveErrorKind::NoRecordsFound { response_code, .. } => Ok(
                        RecordResult::empty(record_type, RecordStatus::from(*response_code)),
                    ),
                    _ => Err(e),
                },
            }
        };

        match Retry::spawn(get_retry_strategy(self.retries), attempt).await {
            Ok(record) => record,
            Err(e) => {
                let mut record = RecordResult::empty(record_type, RecordStatus::Error);
                record.error = Some(e.to_string());
                record
            }
        }
    }
}

#[async_trait]
impl Resolve for DnsClient {
    async fn resolve(
        &self,
        domain: &str,
        types: &[RecordType],
    ) -> Result<ResolutionResult, DomainError> {
        let name = to_query_name(domain)?;
        let mut result = ResolutionResult::new(domain);

        // Sequential per type: bounds per-domain resource use and keeps
        // diagnostics in query order. Concurrency comes from scanning many
        // domains at once.
        for &record_type in types {
            let record = self.query(&name, record_type).await;
            result.records.insert(record_type.to_string(), record);
        }

        if let Some(ns) = result.records.get("NS") {
            if !ns.values.is_empty() {
                result.nameservers = Some(ns.values.clone());
            }
        }

        Ok(result)
    }
}

/// Converts an input name to its canonical ASCII/Punycode FQDN query form.
///
/// Internationalized names are converted before transmission; conversion
/// failure is an error for that domain only, never fatal to the pipeline.
pub(super) fn to_query_name(domain: &str) -> Result<Name, DomainError> {
    let ascii = idna::domain_to_ascii(domain)
        .map_err(|_| DomainError::InvalidName(domain.to_string()))?;
    let mut name =
        Name::from_ascii(&ascii).map_err(|_| DomainError::InvalidName(domain.to_string()))?;
    name.set_fqdn(true);
    Ok(name)
}

/// Decodes every recognized answer record, preserving server answer order.
fn decode_answers(record_type: RecordType, lookup: &Lookup) -> RecordResult {
    let mut record = RecordResult::empty(record_type, RecordStatus::NoError);
    for answer in lookup.record_iter() {
        record.ttl = answer.ttl();
        if let Some(data) = answer.data() {
            if let Some(value) = decode_rdata(data) {
                record.values.push(value);
            }
        }
    }
    record
}
