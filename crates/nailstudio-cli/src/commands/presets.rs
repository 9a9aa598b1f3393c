use anyhow::Result;
use nailstudio_core::design::NailDesign;
use nailstudio_core::presets::builtin_presets;

pub fn run() -> Result<()> {
    for preset in builtin_presets() {
        let mut design = NailDesign::default();
        design.apply(&preset.patch);

        println!("{}  {}", preset.id, preset.name);
        println!("   {}", preset.description);
        println!(
            "   {} / {} / {} / {}",
            design.shape, design.length, design.finish, design.color
        );
        if let Some(pattern) = design.pattern() {
            println!("   \"{pattern}\"");
        }
        println!();
    }
    Ok(())
}
