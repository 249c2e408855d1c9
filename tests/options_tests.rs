use std::io::Write;

use poster_overlay::color::HexColor;
use poster_overlay::config::{OverlayKind, OverlayOptions};

#[test]
fn sparse_yaml_document_parses_with_defaults() {
    let opts = OverlayOptions::from_yaml_str("overlay-type: poster").unwrap();
    assert_eq!(opts.overlay_type, OverlayKind::Poster);
    assert!(!opts.border_enabled);
    assert_eq!(opts.border_px, 0);
    assert_eq!(opts.border_color, HexColor::BLACK);
    assert_eq!(opts.matte_height_ratio, 0.0);
    assert_eq!(opts.vignette_strength, 0.0);
    assert_eq!(opts.grain_amount, 0.0);
    assert_eq!(opts.grain_size, 1.0);
    assert!(!opts.show_text_area);
}

#[test]
fn full_kebab_case_document_parses() {
    let yaml = r##"
overlay-type: background
border-enabled: true
border-px: 40
border-color: "#e0e0e0"
corner-radius: 0.25
matte-height-ratio: 0.2
fade-height-ratio: 0.1
gradient-color: "101418"
inner-glow-strength: 0.35
inner-glow-color: "ffd27f"
vignette-strength: 0.6
vignette-color: "000000"
grain-amount: 0.15
grain-size: 2.5
show-text-area: true
text-box-w: 1600
text-box-h: 400
text-box-offset: 150
"##;
    let opts = OverlayOptions::from_yaml_str(yaml).unwrap();
    assert_eq!(opts.overlay_type, OverlayKind::Background);
    assert!(opts.border_enabled);
    assert_eq!(opts.border_px, 40);
    assert_eq!(opts.border_color, HexColor([224, 224, 224]));
    assert_eq!(opts.gradient_color, HexColor([16, 20, 24]));
    assert_eq!(opts.inner_glow_color, HexColor([255, 210, 127]));
    assert_eq!(opts.text_box_w, 1600);
    assert_eq!(opts.text_box_offset, 150);
}

#[test]
fn json_document_parses_the_same_shape() {
    let json = r##"{
        "overlay-type": "background",
        "vignette-strength": 0.5,
        "vignette-color": "#202020"
    }"##;
    let opts = OverlayOptions::from_json_str(json).unwrap();
    assert_eq!(opts.overlay_type, OverlayKind::Background);
    assert_eq!(opts.vignette_strength, 0.5);
    assert_eq!(opts.vignette_color, HexColor([32, 32, 32]));
}

#[test]
fn unknown_keys_are_rejected_at_the_boundary() {
    let err = OverlayOptions::from_yaml_str("glitter-amount: 0.9");
    assert!(err.is_err());
}

#[test]
fn malformed_colors_parse_to_black_without_error() {
    let opts = OverlayOptions::from_yaml_str("border-color: notacolor").unwrap();
    assert_eq!(opts.border_color, HexColor::BLACK);
}

#[test]
fn yaml_file_loads_by_default() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "matte-height-ratio: 0.25").unwrap();
    let opts = OverlayOptions::from_file(file.path()).unwrap();
    assert_eq!(opts.matte_height_ratio, 0.25);
}

#[test]
fn json_extension_switches_the_parser() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{{\"grain-amount\": 0.4}}").unwrap();
    let opts = OverlayOptions::from_file(file.path()).unwrap();
    assert_eq!(opts.grain_amount, 0.4);
}

#[test]
fn missing_file_reports_its_path() {
    let err = OverlayOptions::from_file("/no/such/overlay.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("/no/such/overlay.yaml"));
}
