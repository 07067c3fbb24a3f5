use std::path::PathBuf;

use clap::Parser;
use skelly::{InstallOptions, RunOutcome};

#[derive(Parser)]
#[command(name = "skelly")]
#[command(version)]
#[command(
    about = "Configure a freshly scaffolded application skeleton",
    long_about = None
)]
struct Cli {
    /// Root of the project to configure
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Keep the installer executable instead of deleting it afterwards
    #[arg(long)]
    keep_installer: bool,
}

fn main() {
    let cli = Cli::parse();

    let options =
        InstallOptions { project_root: cli.path, keep_installer: cli.keep_installer };

    match skelly::install(options) {
        Ok(RunOutcome::Completed { steps }) => {
            println!("✅ Application configured ({steps} steps)");
        }
        Ok(RunOutcome::Cancelled) => {
            println!("Installation cancelled. No changes were made.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
