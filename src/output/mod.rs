//! Rendering of completed scan outcomes.
//!
//! Two presentations: one JSON document per outcome (newline-delimited), or
//! a human-readable block per domain with aligned record columns.

use std::io::Write;

use crate::dns::{RecordStatus, RECORD_BATTERY};
use crate::scanner::ScanOutcome;

/// Writes one JSON document for the outcome, terminated by a newline.
pub fn write_json<W: Write>(w: &mut W, outcome: &ScanOutcome) -> std::io::Result<()> {
    serde_json::to_writer(&mut *w, outcome)?;
    writeln!(w)
}

/// Writes a human-readable block for the outcome.
///
/// Record rows are listed in query order: rows with values show the joined
/// values and the TTL, rows without values show their non-NOERROR status in
/// brackets. Analysis findings follow, then a separator line.
pub fn write_text<W: Write>(w: &mut W, outcome: &ScanOutcome) -> std::io::Result<()> {
    let resolution = &outcome.resolution;
    let analysis = &outcome.analysis;

    writeln!(w, "▶ Domain: {}", resolution.domain)?;

    let mut rows: Vec<(String, String, Option<u32>)> = Vec::new();
    for record_type in RECORD_BATTERY {
        let tag = record_type.to_string();
        let Some(record) = resolution.records.get(&tag) else {
            continue;
        };
        if !record.values.is_empty() {
            rows.push((tag, record.values.join(", "), Some(record.ttl)));
        } else if record.status != RecordStatus::NoError {
            rows.push((tag, format!("[{}]", record.status), None));
        }
    }

    let type_width = rows.iter().map(|(tag, _, _)| tag.len()).max().unwrap_or(0);
    let value_width = rows
        .iter()
        .filter(|(_, _, ttl)| ttl.is_some())
        .map(|(_, value, _)| value.len())
        .max()
        .unwrap_or(0);
    for (tag, value, ttl) in &rows {
        match ttl {
            Some(ttl) => writeln!(w, "  {tag:<type_width$}  {value:<value_width$}  (TTL: {ttl})")?,
            None => writeln!(w, "  {tag:<type_width$}  {value}")?,
        }
    }

    if analysis.is_dangling {
        let target = analysis.dangling_cname.as_deref().unwrap_or("");
        writeln!(
            w,
            "  [!] VULNERABILITY: Potential Dangling CNAME detected pointing to {target}"
        )?;
    }
    if let Some(provider) = &analysis.cloud_provider {
        writeln!(w, "  [*] Provider: {provider}")?;
    }
    if resolution.has_wildcard {
        writeln!(w, "  [*] Wildcard: Enabled")?;
    }
    writeln!(w, "{}", "-".repeat(40))
}
