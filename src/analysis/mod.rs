//! Security analysis over resolved record sets.
//!
//! [`analyze`] is a pure function: no network I/O, deterministic for a given
//! record set, and the risk level only ever rises within one invocation.

use std::fmt;

use serde::Serialize;

use crate::dns::{RecordStatus, ResolutionResult};

/// Known cloud/SaaS suffixes and their provider labels.
///
/// First suffix match wins; table order is the tie-break. Matching is
/// case-insensitive and DNS-layer only -- no response-body fingerprinting.
const PROVIDERS: &[(&str, &str)] = &[
    ("s3.amazonaws.com", "AWS S3"),
    ("elasticbeanstalk.com", "AWS Elastic Beanstalk"),
    ("azurewebsites.net", "Azure App Service"),
    ("cloudapp.net", "Azure Cloud App"),
    ("herokuapp.com", "Heroku"),
    ("github.io", "GitHub Pages"),
    ("wordpress.com", "WordPress"),
    ("shopify.com", "Shopify"),
    ("zendesk.com", "Zendesk"),
    ("fastly.net", "Fastly"),
    ("akamaiedge.net", "Akamai"),
];

/// Risk classification for a scanned domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Returns the canonical label for this risk level.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived security analysis for one domain. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Whether the domain looks like a dangling CNAME.
    pub is_dangling: bool,
    /// The unresolved CNAME target, when dangling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dangling_cname: Option<String>,
    /// Provider label for a recognized CNAME target suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<String>,
    /// Risk classification; starts LOW and only ever rises.
    pub risk_level: RiskLevel,
    /// Free-text observations, in the order they were made.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

/// Processes a resolved record set to identify takeover exposure.
///
/// The dangling heuristic works off DNS status codes only: a CNAME value
/// whose chased A query came back NXDOMAIN (or SERVFAIL with nothing
/// decoded) marks the domain dangling at HIGH risk. It can false-positive
/// on transient SERVFAIL and false-negative on providers that answer
/// NOERROR for claimable resources; that tradeoff is accepted.
pub fn analyze(resolution: &ResolutionResult) -> Analysis {
    let mut analysis = Analysis {
        is_dangling: false,
        dangling_cname: None,
        cloud_provider: None,
        risk_level: RiskLevel::Low,
        notes: Vec::new(),
    };

    if let Some(target) = resolution
        .record("CNAME")
        .and_then(|cname| cname.values.first())
    {
        analysis.notes.push(format!("CNAME target: {target}"));

        if let Some(provider) = detect_provider(target) {
            analysis.cloud_provider = Some(provider.to_string());
            analysis.notes.push(format!("SaaS Provider: {provider}"));
        }

        // The A query for the same name chases the CNAME, so a missing
        // chase target shows up there as NXDOMAIN (or an empty SERVFAIL).
        if let Some(a) = resolution.record("A") {
            if a.status == RecordStatus::NxDomain
                || (a.status == RecordStatus::ServFail && a.values.is_empty())
            {
                analysis.is_dangling = true;
                analysis.dangling_cname = Some(target.clone());
                analysis.risk_level = RiskLevel::High;
                analysis.notes.push("Potential Dangling CNAME".to_string());
            }
        }
    }

    // NS present without SOA flags a possible lame delegation for human
    // review; it is not a verdict on its own and leaves the risk untouched.
    if resolution
        .record("NS")
        .is_some_and(|ns| !ns.values.is_empty())
        && resolution
            .record("SOA")
            .is_some_and(|soa| soa.status == RecordStatus::NxDomain)
    {
        analysis
            .notes
            .push("NS records present but SOA missing (Anomalous)".to_string());
    }

    analysis
}

/// Classifies a CNAME target against the known provider suffixes.
///
/// Matching is case-insensitive; a trailing root dot on the target (the
/// usual FQDN form of a decoded CNAME) is ignored.
pub fn detect_provider(cname: &str) -> Option<&'static str> {
    let target = cname.to_lowercase();
    let target = target.trim_end_matches('.');
    PROVIDERS
        .iter()
        .find(|(suffix, _)| target.ends_with(suffix))
        .map(|&(_, provider)| provider)
}

#[cfg(test)]
mod tests;
