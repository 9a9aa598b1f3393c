use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use nailstudio_core::io::image_io::load_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let info = image.info()?;

    println!("File:        {}", args.file.display());
    println!("Format:      {}", info.mime);
    println!("Dimensions:  {}x{}", info.width, info.height);

    let kb = info.byte_len as f64 / 1024.0;
    if kb < 1024.0 {
        println!("Size:        {:.1} KB", kb);
    } else {
        println!("Size:        {:.1} MB", kb / 1024.0);
    }

    Ok(())
}
