//! Built-in "trending" designs.

use crate::design::{DesignPatch, HexColor, NailFinish, NailLength, NailShape};
use crate::error::{NailStudioError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub patch: DesignPatch,
}

/// All built-in presets, in display order.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            id: "1",
            name: "Classic French",
            description: "Timeless pink and white french tips",
            patch: DesignPatch {
                color: Some(HexColor::new(0xfc, 0xe4, 0xec)),
                finish: Some(NailFinish::Glossy),
                pattern_prompt: Some("Classic white french tips, very neat and clean".into()),
                ..Default::default()
            },
        },
        Preset {
            id: "2",
            name: "Midnight Galaxy",
            description: "Deep blue with stars",
            patch: DesignPatch {
                color: Some(HexColor::new(0x1a, 0x23, 0x7e)),
                finish: Some(NailFinish::Glitter),
                pattern_prompt: Some(
                    "Galaxy theme, deep blue and purple nebula, tiny white stars, cosmic dust"
                        .into(),
                ),
                ..Default::default()
            },
        },
        Preset {
            id: "3",
            name: "Ruby Red Stiletto",
            description: "Fierce red look",
            patch: DesignPatch {
                shape: Some(NailShape::Stiletto),
                length: Some(NailLength::Long),
                color: Some(HexColor::new(0xd5, 0x00, 0x00)),
                finish: Some(NailFinish::Glossy),
                pattern_prompt: Some("Deep blood red solid color, vampire chic".into()),
            },
        },
        Preset {
            id: "4",
            name: "Marble Elegance",
            description: "White marble with gold veins",
            patch: DesignPatch {
                color: Some(HexColor::new(0xff, 0xff, 0xff)),
                finish: Some(NailFinish::Matte),
                pattern_prompt: Some(
                    "White carrara marble texture with delicate gold veins".into(),
                ),
                ..Default::default()
            },
        },
    ]
}

/// Look a preset up by id or by name (case-insensitive).
pub fn find_preset(key: &str) -> Result<Preset> {
    let key = key.trim();
    builtin_presets()
        .into_iter()
        .find(|p| p.id == key || p.name.eq_ignore_ascii_case(key))
        .ok_or_else(|| NailStudioError::UnknownPreset(key.to_string()))
}
