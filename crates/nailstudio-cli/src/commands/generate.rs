use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use nailstudio_core::config::StudioConfig;
use nailstudio_core::generate::{GeminiClient, NailArtGenerator};
use nailstudio_core::io::image_io::{default_export_name, load_image, save_png};
use tracing::debug;

use super::design::DesignArgs;

#[derive(Args)]
pub struct GenerateArgs {
    /// Photo of a hand (PNG, JPEG, WebP, ...)
    pub file: PathBuf,

    #[command(flatten)]
    pub design: DesignArgs,

    /// Studio config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output PNG path (defaults to a timestamped name in the export directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    let config = match args.config {
        Some(ref path) => StudioConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => StudioConfig::default(),
    };

    let design = args.design.to_design()?;
    debug!(?design, "resolved design");
    let source = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let output = args.output.clone().unwrap_or_else(|| {
        let name = default_export_name(&config.export.file_prefix);
        match config.export.directory {
            Some(ref dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    });

    crate::summary::print_generate_summary(&args.file, &output, &design, &config.generator.model);

    let client = GeminiClient::new(&config.generator)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} {elapsed}")?);
    pb.set_message("Designing...");
    pb.enable_steady_tick(Duration::from_millis(120));

    let start = Instant::now();
    let result = client.generate(&source, &design);
    pb.finish_and_clear();
    let generated = result.context("Generation failed")?;

    save_png(&generated, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Generated in {:.1}s, saved to {}",
        start.elapsed().as_secs_f32(),
        output.display()
    );

    Ok(())
}
