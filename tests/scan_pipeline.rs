//! End-to-end pipeline tests through the public API, using an injected
//! resolver double instead of real DNS.

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::proto::rr::RecordType;

use domain_recon::dns::{RecordResult, RecordStatus, Resolve, ResolutionResult};
use domain_recon::error_handling::{DomainError, ProcessingStats};
use domain_recon::scanner::{scan, ScanContext, ScanOptions};
use domain_recon::wildcard::WildcardProber;

struct MockResolver;

fn record(tag: &str, values: &[&str], status: RecordStatus) -> RecordResult {
    RecordResult {
        record_type: tag.to_string(),
        values: values.iter().map(|v| v.to_string()).collect(),
        ttl: 3600,
        status,
        error: None,
    }
}

#[async_trait]
impl Resolve for MockResolver {
    async fn resolve(
        &self,
        domain: &str,
        _types: &[RecordType],
    ) -> Result<ResolutionResult, DomainError> {
        let mut result = ResolutionResult::new(domain);
        let records = if domain.starts_with("wildcard-") {
            vec![record("A", &[], RecordStatus::NxDomain)]
        } else if domain == "dangler.com" {
            vec![
                record("CNAME", &["dead.target.com."], RecordStatus::NoError),
                record("A", &[], RecordStatus::NxDomain),
            ]
        } else {
            vec![record("A", &["1.2.3.4"], RecordStatus::NoError)]
        };
        for r in records {
            result.records.insert(r.record_type.clone(), r);
        }
        Ok(result)
    }
}

fn ctx() -> ScanContext {
    ScanContext {
        resolver: Arc::new(MockResolver),
        prober: Arc::new(WildcardProber::with_seed(7)),
        stats: Arc::new(ProcessingStats::new()),
        completed: Arc::new(AtomicUsize::new(0)),
    }
}

#[tokio::test]
async fn scan_reports_every_domain_with_one_dangling_warning() {
    let input = "foo.com\nbar.com\nbaz.com\ndangler.com\n";
    let opts = ScanOptions {
        concurrency: 4,
        json: false,
        only_dangling: false,
    };

    let (out, summary) = scan(opts, ctx(), input.as_bytes(), Vec::new())
        .await
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    for domain in ["foo.com", "bar.com", "baz.com", "dangler.com"] {
        assert!(text.contains(&format!("▶ Domain: {domain}")));
    }
    assert_eq!(
        text.matches("VULNERABILITY: Potential Dangling CNAME").count(),
        1,
        "expected exactly one dangling warning:\n{text}"
    );

    // The warning belongs to dangler.com's block.
    let dangler_block = text
        .split("▶ Domain: ")
        .find(|block| block.starts_with("dangler.com"))
        .expect("dangler.com block present");
    assert!(dangler_block.contains("dead.target.com"));

    assert_eq!(summary.domains, 4);
    assert_eq!(summary.dangling, 1);
    assert_eq!(summary.skipped, 0);
}

#[tokio::test]
async fn only_dangling_filter_suppresses_clean_domains() {
    let opts = ScanOptions {
        concurrency: 2,
        json: true,
        only_dangling: true,
    };

    let (out, summary) = scan(opts, ctx(), "foo.com\ndangler.com\n".as_bytes(), Vec::new())
        .await
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1, "only the dangler should be emitted");
    let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(value["resolution"]["domain"], "dangler.com");
    assert_eq!(value["analysis"]["is_dangling"], true);
    assert_eq!(value["analysis"]["dangling_cname"], "dead.target.com.");

    assert_eq!(summary.domains, 2);
    assert_eq!(summary.emitted, 1);
}

#[tokio::test]
async fn duplicate_inputs_collapse_after_trailing_dot_stripping() {
    let opts = ScanOptions {
        concurrency: 2,
        json: false,
        only_dangling: false,
    };

    let (out, summary) = scan(
        opts,
        ctx(),
        "foo.com\nfoo.com.\nbar.com\n".as_bytes(),
        Vec::new(),
    )
    .await
    .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("▶ Domain: foo.com").count(), 1);
    assert_eq!(summary.domains, 2);
}
