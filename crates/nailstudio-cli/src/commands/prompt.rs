use anyhow::Result;
use clap::Args;
use nailstudio_core::prompt::build_prompt;

use super::design::DesignArgs;

#[derive(Args)]
pub struct PromptArgs {
    #[command(flatten)]
    pub design: DesignArgs,
}

pub fn run(args: &PromptArgs) -> Result<()> {
    let design = args.design.to_design()?;
    println!("{}", build_prompt(&design));
    Ok(())
}
