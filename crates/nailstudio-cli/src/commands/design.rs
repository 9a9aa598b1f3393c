use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use nailstudio_core::design::{HexColor, NailDesign, NailFinish, NailLength, NailShape};
use nailstudio_core::presets::find_preset;

#[derive(Clone, Copy, ValueEnum)]
pub enum ShapeArg {
    Natural,
    Almond,
    Coffin,
    Square,
    Stiletto,
    Oval,
}

impl From<ShapeArg> for NailShape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Natural => NailShape::Natural,
            ShapeArg::Almond => NailShape::Almond,
            ShapeArg::Coffin => NailShape::Coffin,
            ShapeArg::Square => NailShape::Square,
            ShapeArg::Stiletto => NailShape::Stiletto,
            ShapeArg::Oval => NailShape::Oval,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LengthArg {
    Short,
    Medium,
    Long,
    ExtraLong,
}

impl From<LengthArg> for NailLength {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Short => NailLength::Short,
            LengthArg::Medium => NailLength::Medium,
            LengthArg::Long => NailLength::Long,
            LengthArg::ExtraLong => NailLength::ExtraLong,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FinishArg {
    Glossy,
    Matte,
    Chrome,
    Glitter,
    Holographic,
}

impl From<FinishArg> for NailFinish {
    fn from(arg: FinishArg) -> Self {
        match arg {
            FinishArg::Glossy => NailFinish::Glossy,
            FinishArg::Matte => NailFinish::Matte,
            FinishArg::Chrome => NailFinish::Chrome,
            FinishArg::Glitter => NailFinish::Glitter,
            FinishArg::Holographic => NailFinish::Holographic,
        }
    }
}

/// Design flags shared by `generate` and `prompt`.
#[derive(Args)]
pub struct DesignArgs {
    /// Start from a preset (id or name, see `nailstudio presets`)
    #[arg(long)]
    pub preset: Option<String>,

    /// Nail shape
    #[arg(long, value_enum)]
    pub shape: Option<ShapeArg>,

    /// Nail length
    #[arg(long, value_enum)]
    pub length: Option<LengthArg>,

    /// Finish / texture
    #[arg(long, value_enum)]
    pub finish: Option<FinishArg>,

    /// Base color as #rrggbb
    #[arg(long)]
    pub color: Option<String>,

    /// Free-text pattern description
    #[arg(long)]
    pub pattern: Option<String>,
}

impl DesignArgs {
    /// Default design, then the preset, then any explicit flags.
    pub fn to_design(&self) -> Result<NailDesign> {
        let mut design = NailDesign::default();

        if let Some(ref key) = self.preset {
            let preset = find_preset(key)?;
            design.apply(&preset.patch);
        }
        if let Some(shape) = self.shape {
            design.shape = shape.into();
        }
        if let Some(length) = self.length {
            design.length = length.into();
        }
        if let Some(finish) = self.finish {
            design.finish = finish.into();
        }
        if let Some(ref color) = self.color {
            design.color = color
                .parse::<HexColor>()
                .with_context(|| format!("Invalid --color {color}"))?;
        }
        if let Some(ref pattern) = self.pattern {
            design.pattern_prompt = pattern.clone();
        }

        Ok(design)
    }
}
