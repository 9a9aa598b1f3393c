//! Nail design parameters chosen by the user.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NailStudioError, Result};

/// Lowercase, strip spaces/dashes/underscores: "Extra-Long" -> "extralong".
fn normalize_choice(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Implements `ALL`, `Display` and a forgiving `FromStr` for a fieldless choice enum.
macro_rules! choice_enum {
    ($name:ident, $field:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &[Self] = &[$(Self::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = NailStudioError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = normalize_choice(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize_choice(v.label()) == wanted)
                    .ok_or_else(|| NailStudioError::InvalidChoice {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NailShape {
    Natural,
    #[default]
    Almond,
    Coffin,
    Square,
    Stiletto,
    Oval,
}

choice_enum!(NailShape, "shape", {
    Natural => "Natural",
    Almond => "Almond",
    Coffin => "Coffin",
    Square => "Square",
    Stiletto => "Stiletto",
    Oval => "Oval",
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NailLength {
    Short,
    #[default]
    Medium,
    Long,
    ExtraLong,
}

choice_enum!(NailLength, "length", {
    Short => "Short",
    Medium => "Medium",
    Long => "Long",
    ExtraLong => "Extra Long",
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NailFinish {
    #[default]
    Glossy,
    Matte,
    Chrome,
    Glitter,
    Holographic,
}

choice_enum!(NailFinish, "finish", {
    Glossy => "Glossy",
    Matte => "Matte",
    Chrome => "Chrome",
    Glitter => "Glitter",
    Holographic => "Holographic",
});

/// An sRGB color, displayed as lowercase `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Base color of the default design (soft pink).
pub const DEFAULT_NAIL_COLOR: HexColor = HexColor::new(0xff, 0xb7, 0xb2);

impl Default for HexColor {
    fn default() -> Self {
        DEFAULT_NAIL_COLOR
    }
}

impl FromStr for HexColor {
    type Err = NailStudioError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NailStudioError::InvalidColor(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for HexColor {
    type Error = NailStudioError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Full design configuration sent to the generator.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NailDesign {
    pub shape: NailShape,
    pub length: NailLength,
    pub finish: NailFinish,
    pub color: HexColor,
    pub pattern_prompt: String,
}

impl NailDesign {
    /// Pattern text with surrounding whitespace removed, or `None` if blank.
    pub fn pattern(&self) -> Option<&str> {
        let trimmed = self.pattern_prompt.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Overwrite the fields the patch sets; leave the rest.
    pub fn apply(&mut self, patch: &DesignPatch) {
        if let Some(shape) = patch.shape {
            self.shape = shape;
        }
        if let Some(length) = patch.length {
            self.length = length;
        }
        if let Some(finish) = patch.finish {
            self.finish = finish;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(ref pattern) = patch.pattern_prompt {
            self.pattern_prompt = pattern.clone();
        }
    }
}

/// Partial design; `None` fields are left untouched by [`NailDesign::apply`].
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignPatch {
    pub shape: Option<NailShape>,
    pub length: Option<NailLength>,
    pub finish: Option<NailFinish>,
    pub color: Option<HexColor>,
    pub pattern_prompt: Option<String>,
}
