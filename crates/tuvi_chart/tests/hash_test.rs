//! Canonical hash properties: determinism, order independence, sensitivity.

use tuvi_base::Gender;
use tuvi_calendar::SolarDate;
use tuvi_chart::{
    ChartEngine, ChartInput, EngineConfig, NatalChart, canonical_hash, canonical_record,
    section_hash,
};

fn chart(y: i32, m: u32, d: u32, hour: u32, gender: Gender) -> NatalChart {
    let engine = ChartEngine::new(EngineConfig::default()).unwrap();
    let date = SolarDate::new(y, m, d).unwrap();
    engine
        .compute(&ChartInput::solar(date, hour, 0, gender))
        .unwrap()
}

#[test]
fn hash_is_lowercase_hex() {
    let c = chart(1995, 3, 2, 8, Gender::Female);
    assert_eq!(c.canonical_hash.len(), 64);
    assert!(
        c.canonical_hash
            .chars()
            .all(|ch| ch.is_ascii_digit() || ('a'..='f').contains(&ch))
    );
}

#[test]
fn hash_is_deterministic() {
    let a = chart(1995, 3, 2, 8, Gender::Female);
    let b = chart(1995, 3, 2, 8, Gender::Female);
    assert_eq!(a.canonical_hash, b.canonical_hash);
    assert_eq!(canonical_hash(&a).unwrap(), a.canonical_hash);
}

#[test]
fn hash_ignores_palace_and_star_order() {
    let base = chart(1995, 3, 2, 8, Gender::Female);
    let mut shuffled = base.clone();
    shuffled.palaces.reverse();
    shuffled.palaces.rotate_left(5);
    for p in &mut shuffled.palaces {
        p.stars.reverse();
        for (i, s) in p.stars.iter_mut().enumerate() {
            s.order = i as u8;
        }
    }
    assert_ne!(shuffled.palaces, base.palaces);
    assert_eq!(
        canonical_hash(&shuffled).unwrap(),
        base.canonical_hash
    );
}

#[test]
fn hash_tracks_facts() {
    let base = chart(1995, 3, 2, 8, Gender::Female);
    let other_gender = chart(1995, 3, 2, 8, Gender::Male);
    let other_hour = chart(1995, 3, 2, 10, Gender::Female);
    let other_day = chart(1995, 3, 3, 8, Gender::Female);
    assert_ne!(base.canonical_hash, other_gender.canonical_hash);
    assert_ne!(base.canonical_hash, other_hour.canonical_hash);
    assert_ne!(base.canonical_hash, other_day.canonical_hash);
}

#[test]
fn record_keys_sorted() {
    let c = chart(1995, 3, 2, 8, Gender::Female);
    let record = canonical_record(&c);
    let obj = record.as_object().unwrap();
    let keys: Vec<&String> = obj.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.starts_with("{\"am_duong\":"));
    assert!(!json.contains("minute"));
}

#[test]
fn section_hashes_differ_per_section() {
    let c = chart(1995, 3, 2, 8, Gender::Female);
    let overview = section_hash(&c.canonical_hash, "overview");
    let career = section_hash(&c.canonical_hash, "career");
    assert_ne!(overview, career);
    assert_eq!(overview, section_hash(&c.canonical_hash, "overview"));
    assert_eq!(overview.len(), 64);
}
