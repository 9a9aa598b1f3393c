use nailstudio_core::design::{
    DesignPatch, HexColor, NailDesign, NailFinish, NailLength, NailShape, DEFAULT_NAIL_COLOR,
};
use nailstudio_core::presets::{builtin_presets, find_preset};

// ---------------------------------------------------------------------------
// Choices
// ---------------------------------------------------------------------------

#[test]
fn test_display_names() {
    assert_eq!(NailLength::ExtraLong.to_string(), "Extra Long");
    assert_eq!(NailShape::Stiletto.to_string(), "Stiletto");
    assert_eq!(NailFinish::Holographic.to_string(), "Holographic");
}

#[test]
fn test_all_lists() {
    assert_eq!(NailShape::ALL.len(), 6);
    assert_eq!(NailLength::ALL.len(), 4);
    assert_eq!(NailFinish::ALL.len(), 5);
}

#[test]
fn test_parse_is_forgiving() {
    assert_eq!("extra-long".parse::<NailLength>().unwrap(), NailLength::ExtraLong);
    assert_eq!("Extra Long".parse::<NailLength>().unwrap(), NailLength::ExtraLong);
    assert_eq!("COFFIN".parse::<NailShape>().unwrap(), NailShape::Coffin);
    assert!("triangle".parse::<NailShape>().is_err());
}

#[test]
fn test_default_design() {
    let d = NailDesign::default();
    assert_eq!(d.shape, NailShape::Almond);
    assert_eq!(d.length, NailLength::Medium);
    assert_eq!(d.finish, NailFinish::Glossy);
    assert_eq!(d.color, DEFAULT_NAIL_COLOR);
    assert_eq!(d.color.to_string(), "#ffb7b2");
    assert!(d.pattern().is_none());
}

// ---------------------------------------------------------------------------
// HexColor
// ---------------------------------------------------------------------------

#[test]
fn test_hex_color_parse() {
    let c: HexColor = "#D50000".parse().unwrap();
    assert_eq!(c.to_array(), [0xd5, 0, 0]);
    assert_eq!(c.to_string(), "#d50000");

    let short: HexColor = "#fff".parse().unwrap();
    assert_eq!(short, HexColor::new(255, 255, 255));
}

#[test]
fn test_hex_color_rejects_garbage() {
    for bad in ["d50000", "#12345", "#gggggg", "", "#1234567"] {
        assert!(bad.parse::<HexColor>().is_err(), "accepted {bad:?}");
    }
}

#[test]
fn test_design_serializes_color_as_string() {
    let toml_str = toml::to_string(&NailDesign::default()).unwrap();
    assert!(toml_str.contains("color = \"#ffb7b2\""), "got: {toml_str}");
    let back: NailDesign = toml::from_str(&toml_str).unwrap();
    assert_eq!(back, NailDesign::default());
}

// ---------------------------------------------------------------------------
// Patches and presets
// ---------------------------------------------------------------------------

#[test]
fn test_patch_only_touches_set_fields() {
    let mut d = NailDesign {
        shape: NailShape::Square,
        ..Default::default()
    };
    d.apply(&DesignPatch {
        finish: Some(NailFinish::Chrome),
        ..Default::default()
    });
    assert_eq!(d.shape, NailShape::Square);
    assert_eq!(d.finish, NailFinish::Chrome);
}

#[test]
fn test_builtin_presets() {
    let presets = builtin_presets();
    let names: Vec<_> = presets.iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        ["Classic French", "Midnight Galaxy", "Ruby Red Stiletto", "Marble Elegance"]
    );
}

#[test]
fn test_ruby_preset_sets_shape_and_length() {
    let mut d = NailDesign::default();
    d.apply(&find_preset("ruby red stiletto").unwrap().patch);
    assert_eq!(d.shape, NailShape::Stiletto);
    assert_eq!(d.length, NailLength::Long);
    assert_eq!(d.color.to_string(), "#d50000");
}

#[test]
fn test_french_preset_keeps_structure() {
    let mut d = NailDesign {
        shape: NailShape::Oval,
        length: NailLength::Short,
        ..Default::default()
    };
    d.apply(&find_preset("1").unwrap().patch);
    assert_eq!(d.shape, NailShape::Oval);
    assert_eq!(d.length, NailLength::Short);
    assert_eq!(d.pattern(), Some("Classic white french tips, very neat and clean"));
}

#[test]
fn test_unknown_preset() {
    assert!(find_preset("Neon Dreams").is_err());
}
