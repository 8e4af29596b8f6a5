use clap::Args;
use std::path::PathBuf;
use wheelboard::error::WbResult;
use wheelboard::loader;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Layout file (.yaml or .json)
    pub file: PathBuf,
}

pub fn run(args: &ValidateArgs) -> WbResult<()> {
    let data = loader::load_keyboard_data(&args.file)?;

    println!("Layout OK: {}", args.file.display());
    println!("  layers:  {}", data.total_layers());
    println!("  actions: {}", data.action_count());
    Ok(())
}
