//! Dataset shape-contract tests: the external array form of well
//! points and the camelCase collector fields must deserialize exactly,
//! and malformed rows must fail before any geometry runs.

use welltrace_core::{wells_from_raw, CollectorRadial, Error, WellPoint, Wells};

#[test]
fn test_well_point_deserializes_from_array() {
    let p: WellPoint = serde_json::from_str("[10.0, -4.5, -120.0, 310.0]").unwrap();
    assert_eq!(p, WellPoint::new(10.0, -4.5, -120.0, 310.0));
}

#[test]
fn test_well_point_serializes_as_array() {
    let p = WellPoint::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(serde_json::to_string(&p).unwrap(), "[1.0,2.0,3.0,4.0]");
}

#[test]
fn test_short_point_fails_deserialization() {
    let err = serde_json::from_str::<WellPoint>("[1.0, 2.0, 3.0]").unwrap_err();
    assert!(err.to_string().contains("expected 4 components"));
}

#[test]
fn test_wells_deserialize_preserving_point_order() {
    let wells: Wells = serde_json::from_str(
        r#"{"W-1": [[0,0,0,0], [5,0,-10,11.2], [9,2,-25,27.0]]}"#,
    )
    .unwrap();

    let pts = &wells["W-1"];
    assert_eq!(pts.len(), 3);
    assert_eq!(pts[1], WellPoint::new(5.0, 0.0, -10.0, 11.2));
    assert_eq!(pts[2].md, 27.0);
}

#[test]
fn test_collector_deserializes_with_optional_lobes() {
    let c: CollectorRadial = serde_json::from_str(
        r##"{
            "id": "c-7",
            "name": "East flank",
            "color": "#37b24d",
            "cx": 120.0, "cy": -30.0, "cz": -210.0,
            "rx": 40.0, "ry": 25.0, "rz": 18.0,
            "lobeAmp": 0.3,
            "power": 0.5
        }"##,
    )
    .unwrap();

    assert_eq!(c.lobe_amp(), 0.3);
    assert_eq!(c.power(), 0.5);
    // Omitted frequencies fall back to the documented defaults.
    assert_eq!(c.lobe_freq_u(), 3.0);
    assert_eq!(c.lobe_freq_v(), 2.0);
}

#[test]
fn test_raw_ingestion_reports_well_and_index() {
    let mut raw = std::collections::BTreeMap::new();
    raw.insert(
        "B-2".to_string(),
        vec![vec![0.0, 0.0, 0.0, 0.0], vec![1.0, 2.0]],
    );

    match wells_from_raw(raw) {
        Err(Error::InvalidWell { well, index, .. }) => {
            assert_eq!(well, "B-2");
            assert_eq!(index, 1);
        }
        other => panic!("expected InvalidWell, got {other:?}"),
    }
}
