use planforge::{
    decode_payload, save_svg, svg_document, ExportOptions, FeatureCategory, Orientation,
    PaperSize, PlanSession,
};

const PAYLOAD: &str = r#"{
    "version": 0.6,
    "generator": "Overpass API",
    "elements": [
        {"type": "node", "id": 1, "lon": 13.38, "lat": 52.518},
        {"type": "node", "id": 2, "lon": 13.40, "lat": 52.522},
        {"type": "way", "id": 10, "nodes": [1, 2],
         "tags": {"highway": "primary", "name": "Unter den Linden"}},
        {"type": "way", "id": 11, "nodes": [1, 99],
         "tags": {"building": "yes"}},
        {"type": "relation", "id": 50}
    ]
}"#;

#[test]
fn session_payload_to_svg_round_trip() {
    let payload = decode_payload(PAYLOAD).unwrap();

    let mut session = PlanSession::new();
    session.set_categories(&[FeatureCategory::Streets, FeatureCategory::Buildings]);
    session.set_elements(payload.elements);

    let plan = session.export();
    let svg = svg_document(&plan);

    // A4 portrait sheet at physical size
    assert!(svg.contains("width=\"210mm\" height=\"297mm\""));
    // the street survives; the dangling building way was dropped
    assert!(svg.contains("stroke=\"#ff6600\""));
    assert!(!svg.contains("stroke=\"#888888\""));
    // annotations
    assert!(svg.contains(">500 m</text>"));
    assert!(svg.contains(">N</text>"));
}

#[test]
fn save_svg_writes_the_document() {
    let payload = decode_payload(PAYLOAD).unwrap();
    let mut session = PlanSession::new();
    session.set_categories(&[FeatureCategory::Streets]);
    session.set_elements(payload.elements);
    let plan = session.export();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.svg");
    save_svg(&plan, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, svg_document(&plan));
}

#[test]
fn settings_change_keeps_frame_and_sheet_consistent() {
    let mut session = PlanSession::new();
    let updated = session.set_options(ExportOptions {
        scale: 2000,
        paper: PaperSize::A3,
        orientation: Orientation::Landscape,
    });

    // the sheet covers the recomputed frame: re-measuring the box gives the
    // paper's ground coverage back
    let (w, h) = updated.size_meters();
    let (want_w, want_h) = session.options().coverage_meters();
    assert!((w - want_w).abs() / want_w < 0.01);
    assert!((h - want_h).abs() / want_h < 0.01);

    // and the exported page uses the A3 landscape dimensions
    let plan = session.export();
    assert_eq!(plan.page.width, 420.0);
    assert_eq!(plan.page.height, 297.0);
}
