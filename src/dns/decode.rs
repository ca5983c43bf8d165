//! Answer record decoding.
//!
//! Maps raw answer data into the presentation strings carried in
//! [`RecordResult::values`](super::types::RecordResult).

use hickory_resolver::proto::rr::RData;

/// Decodes a single answer record into its presentation string.
///
/// Returns `None` for record data outside the recognized decodable set and
/// for records that decode to an empty string. Multi-field records keep the
/// conventional space-separated presentation order.
pub(super) fn decode_rdata(data: &RData) -> Option<String> {
    let value = match data {
        RData::A(a) => a.0.to_string(),
        RData::AAAA(aaaa) => aaaa.0.to_string(),
        RData::CNAME(cname) => cname.to_utf8(),
        RData::NS(ns) => ns.to_utf8(),
        RData::MX(mx) => format!("{} {}", mx.preference(), mx.exchange().to_utf8()),
        RData::TXT(txt) => txt
            .iter()
            .map(|bytes| String::from_utf8_lossy(bytes).to_string())
            .collect::<Vec<String>>()
            .join(" "),
        RData::SOA(soa) => format!(
            "{} {} {}",
            soa.mname().to_utf8(),
            soa.rname().to_utf8(),
            soa.serial()
        ),
        RData::SRV(srv) => format!(
            "{} {} {} {}",
            srv.priority(),
            srv.weight(),
            srv.port(),
            srv.target().to_utf8()
        ),
        RData::CAA(caa) => caa.to_string(),
        RData::PTR(ptr) => ptr.to_utf8(),
        _ => return None,
    };
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
