use nailstudio_core::design::{NailDesign, NailFinish, NailLength, NailShape};
use nailstudio_core::prompt::build_prompt;

#[test]
fn test_prompt_lists_structure() {
    let design = NailDesign {
        shape: NailShape::Coffin,
        length: NailLength::ExtraLong,
        finish: NailFinish::Chrome,
        ..Default::default()
    };
    let prompt = build_prompt(&design);
    assert!(prompt.contains("- Nail Shape: Coffin"));
    assert!(prompt.contains("- Nail Length: Extra Long"));
    assert!(prompt.contains("- Finish/Texture: Chrome"));
    assert!(prompt.contains("Only modify the fingernails."));
    assert!(prompt.trim_end().ends_with("Output the result as a high-quality image."));
}

#[test]
fn test_prompt_without_pattern_uses_solid_color() {
    let prompt = build_prompt(&NailDesign::default());
    assert!(prompt.contains("- Color: Solid color #ffb7b2."));
    assert!(!prompt.contains("Design/Pattern"));
}

#[test]
fn test_prompt_with_pattern_uses_base_color() {
    let design = NailDesign {
        pattern_prompt: "  Cherry blossom with gold flakes ".into(),
        ..Default::default()
    };
    let prompt = build_prompt(&design);
    assert!(prompt.contains("- Design/Pattern: Cherry blossom with gold flakes\n"));
    assert!(prompt.contains("- Base Color: Use #ffb7b2 as a base if the design allows"));
    assert!(!prompt.contains("Solid color"));
}

#[test]
fn test_whitespace_pattern_counts_as_empty() {
    let design = NailDesign {
        pattern_prompt: "   \n".into(),
        ..Default::default()
    };
    assert!(build_prompt(&design).contains("Solid color"));
}
