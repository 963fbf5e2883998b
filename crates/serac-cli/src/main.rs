mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serac_core::load_config;

use crate::output::{format_failure, format_success, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "serac",
    version = env!("SERAC_VERSION"),
    about = "Typed deployment descriptor for multi-stage EMR data pipelines"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a deployment descriptor and report every decode failure.
    Validate {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { config, format } => {
            let config_path = resolve_path(config);
            let display_path = config_path.display().to_string();
            match load_config(&config_path) {
                Ok(_) => {
                    println!("{}", format_success(&display_path, format));
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("{}", format_failure(&display_path, &err, format));
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn resolve_path(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map(|dir| dir.join(&path))
            .unwrap_or(path)
    }
}
