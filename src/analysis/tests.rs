//! Analyzer tests.

use super::*;
use crate::dns::{RecordResult, RecordStatus, ResolutionResult};
use hickory_resolver::proto::rr::RecordType;

fn record(record_type: RecordType, values: &[&str], status: RecordStatus) -> RecordResult {
    RecordResult {
        record_type: record_type.to_string(),
        values: values.iter().map(|v| v.to_string()).collect(),
        ttl: 300,
        status,
        error: None,
    }
}

fn resolution(domain: &str, records: Vec<RecordResult>) -> ResolutionResult {
    let mut result = ResolutionResult::new(domain);
    for r in records {
        result.records.insert(r.record_type.clone(), r);
    }
    result
}

#[test]
fn test_valid_cname_is_not_dangling() {
    let res = resolution(
        "safe.example.com",
        vec![
            record(
                RecordType::CNAME,
                &["target.example.com."],
                RecordStatus::NoError,
            ),
            record(RecordType::A, &["1.2.3.4"], RecordStatus::NoError),
        ],
    );
    let analysis = analyze(&res);
    assert!(!analysis.is_dangling);
    assert_eq!(analysis.risk_level, RiskLevel::Low);
    assert!(analysis.dangling_cname.is_none());
}

#[test]
fn test_cname_to_nxdomain_is_dangling_high_risk() {
    let res = resolution(
        "danger.example.com",
        vec![
            record(
                RecordType::CNAME,
                &["missing.example.com."],
                RecordStatus::NoError,
            ),
            record(RecordType::A, &[], RecordStatus::NxDomain),
        ],
    );
    let analysis = analyze(&res);
    assert!(analysis.is_dangling);
    assert_eq!(analysis.risk_level, RiskLevel::High);
    assert_eq!(
        analysis.dangling_cname.as_deref(),
        Some("missing.example.com.")
    );
    assert!(analysis
        .notes
        .iter()
        .any(|n| n == "Potential Dangling CNAME"));
}

#[test]
fn test_empty_servfail_is_dangling() {
    let res = resolution(
        "broken.example.com",
        vec![
            record(RecordType::CNAME, &["dead.example.net."], RecordStatus::NoError),
            record(RecordType::A, &[], RecordStatus::ServFail),
        ],
    );
    let analysis = analyze(&res);
    assert!(analysis.is_dangling);
    assert_eq!(analysis.risk_level, RiskLevel::High);
}

#[test]
fn test_servfail_with_values_is_not_dangling() {
    let res = resolution(
        "flaky.example.com",
        vec![
            record(RecordType::CNAME, &["cdn.example.net."], RecordStatus::NoError),
            record(RecordType::A, &["5.6.7.8"], RecordStatus::ServFail),
        ],
    );
    assert!(!analyze(&res).is_dangling);
}

#[test]
fn test_transport_error_is_not_dangling() {
    // ERROR means the exchange never completed; absence of records was
    // never proven, so no verdict.
    let res = resolution(
        "unreachable.example.com",
        vec![
            record(RecordType::CNAME, &["cdn.example.net."], RecordStatus::NoError),
            record(RecordType::A, &[], RecordStatus::Error),
        ],
    );
    assert!(!analyze(&res).is_dangling);
}

#[test]
fn test_no_cname_defaults_to_low_risk() {
    let res = resolution(
        "plain.example.com",
        vec![record(RecordType::A, &["1.2.3.4"], RecordStatus::NoError)],
    );
    let analysis = analyze(&res);
    assert!(!analysis.is_dangling);
    assert_eq!(analysis.risk_level, RiskLevel::Low);
    assert!(analysis.notes.is_empty());
    assert!(analysis.cloud_provider.is_none());
}

#[test]
fn test_first_cname_value_is_the_chase_target() {
    let res = resolution(
        "multi.example.com",
        vec![
            record(
                RecordType::CNAME,
                &["first.example.net.", "second.example.net."],
                RecordStatus::NoError,
            ),
            record(RecordType::A, &[], RecordStatus::NxDomain),
        ],
    );
    let analysis = analyze(&res);
    assert_eq!(analysis.dangling_cname.as_deref(), Some("first.example.net."));
}

#[test]
fn test_provider_detection_by_suffix() {
    assert_eq!(detect_provider("shops.myshopify.com"), Some("Shopify"));
    assert_eq!(
        detect_provider("app.azurewebsites.net"),
        Some("Azure App Service")
    );
    assert_eq!(detect_provider("bucket.s3.amazonaws.com"), Some("AWS S3"));
    assert_eq!(detect_provider("project.github.io"), Some("GitHub Pages"));
    assert_eq!(detect_provider("unknown.example.org"), None);
}

#[test]
fn test_provider_detection_is_case_insensitive() {
    assert_eq!(detect_provider("MyApp.HerokuApp.Com"), Some("Heroku"));
}

#[test]
fn test_provider_detection_ignores_trailing_root_dot() {
    assert_eq!(detect_provider("shops.myshopify.com."), Some("Shopify"));
}

#[test]
fn test_provider_noted_in_analysis() {
    let res = resolution(
        "shop.example.com",
        vec![record(
            RecordType::CNAME,
            &["shops.myshopify.com."],
            RecordStatus::NoError,
        )],
    );
    let analysis = analyze(&res);
    assert_eq!(analysis.cloud_provider.as_deref(), Some("Shopify"));
    assert!(analysis.notes.iter().any(|n| n == "SaaS Provider: Shopify"));
}

#[test]
fn test_ns_without_soa_adds_note_without_raising_risk() {
    let res = resolution(
        "lame.example.com",
        vec![
            record(RecordType::NS, &["ns1.example.com."], RecordStatus::NoError),
            record(RecordType::SOA, &[], RecordStatus::NxDomain),
        ],
    );
    let analysis = analyze(&res);
    assert!(analysis
        .notes
        .iter()
        .any(|n| n == "NS records present but SOA missing (Anomalous)"));
    assert_eq!(analysis.risk_level, RiskLevel::Low);
}

#[test]
fn test_analyze_is_deterministic() {
    let res = resolution(
        "repeat.example.com",
        vec![
            record(
                RecordType::CNAME,
                &["missing.example.net."],
                RecordStatus::NoError,
            ),
            record(RecordType::A, &[], RecordStatus::NxDomain),
            record(RecordType::NS, &["ns1.example.com."], RecordStatus::NoError),
            record(RecordType::SOA, &[], RecordStatus::NxDomain),
        ],
    );
    let first = serde_json::to_string(&analyze(&res)).unwrap();
    let second = serde_json::to_string(&analyze(&res)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_optional_fields_omitted_from_json() {
    let res = resolution(
        "plain.example.com",
        vec![record(RecordType::A, &["1.2.3.4"], RecordStatus::NoError)],
    );
    let json = serde_json::to_value(analyze(&res)).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("dangling_cname"));
    assert!(!object.contains_key("cloud_provider"));
    assert!(!object.contains_key("notes"));
    assert_eq!(object["risk_level"], "LOW");
}
