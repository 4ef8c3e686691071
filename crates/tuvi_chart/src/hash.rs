//! Canonical content hash of a chart.
//!
//! The hash covers every chart fact that can change an interpretation and
//! nothing else: no narrative text, no input path, no minutes. Palaces are
//! re-sorted by role index and stars by (kind, identity) before hashing, and
//! every JSON object is rebuilt with sorted keys, so the result never depends
//! on construction order or on map iteration order.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};
use sha2::{Digest, Sha256};

use crate::chart::{NatalChart, Palace};
use crate::error::ChartError;

/// Rebuild every object with its keys in lexicographic order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, sort_keys(v))).collect();
            let mut out = Map::new();
            for (k, v) in sorted {
                out.insert(k, v);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

fn palace_record(palace: &Palace) -> Value {
    let mut stars: Vec<_> = palace.stars.iter().collect();
    stars.sort_by_key(|s| (s.kind.priority(), s.star.index()));
    let stars: Vec<Value> = stars
        .iter()
        .enumerate()
        .map(|(order, s)| {
            json!({
                "brightness": s.brightness.code(),
                "element": s.element.code(),
                "is_positive": s.is_positive,
                "kind": s.kind.code(),
                "order": order,
                "star": s.star.code(),
            })
        })
        .collect();
    json!({
        "branch": palace.branch.code(),
        "cung": palace.cung.code(),
        "dai_van_label": palace.dai_van_label,
        "dai_van_start_age": palace.dai_van_start_age,
        "in_triet": palace.in_triet,
        "in_tuan": palace.in_tuan,
        "index": palace.index,
        "is_than_cu": palace.is_than_cu,
        "life_stage": palace.life_stage.code(),
        "stars": stars,
        "stem": palace.stem.code(),
    })
}

/// Canonical JSON record of a chart, keys sorted at every level.
pub fn canonical_record(chart: &NatalChart) -> Value {
    let birth = &chart.birth;
    let center = &chart.center;
    let mut palaces: Vec<&Palace> = chart.palaces.iter().collect();
    palaces.sort_by_key(|p| p.index);

    let record = json!({
        "am_duong": center.am_duong,
        "ban_menh": center.ban_menh.name(),
        "ban_menh_element": center.ban_menh_element.code(),
        "chu_menh": center.chu_menh.map(|s| s.code()),
        "chu_than": center.chu_than.map(|s| s.code()),
        "cuc_element": chart.cuc.element().code(),
        "cuc_value": chart.cuc.value(),
        "day_can_chi": birth.day_can_chi.label(),
        "direction": chart.direction.code(),
        "gender": birth.gender.code(),
        "hour_branch": birth.hour_branch.index(),
        "hour_can_chi": birth.hour_can_chi.label(),
        "is_leap_month": birth.lunar.is_leap_month(),
        "lunar_day": birth.lunar.day(),
        "lunar_month": birth.lunar.month(),
        "lunar_year": birth.lunar.year(),
        "month_can_chi": birth.month_can_chi.label(),
        "palaces": palaces.into_iter().map(palace_record).collect::<Vec<_>>(),
        "than_cu": center.than_cu.code(),
        "triet": [chart.markers.triet[0].code(), chart.markers.triet[1].code()],
        "tuan": [chart.markers.tuan[0].code(), chart.markers.tuan[1].code()],
        "year_can_chi": birth.year_can_chi.label(),
    });
    sort_keys(record)
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// SHA-256 of the canonical record as 64 lowercase hex characters.
pub fn canonical_hash(chart: &NatalChart) -> Result<String, ChartError> {
    let bytes = serde_json::to_vec(&canonical_record(chart))?;
    Ok(sha256_hex(&bytes))
}

/// Key for a per-section artefact of a chart: SHA-256 of `"<hash>:<section>"`.
pub fn section_hash(canonical_hash: &str, section: &str) -> String {
    sha256_hex(format!("{canonical_hash}:{section}").as_bytes())
}
