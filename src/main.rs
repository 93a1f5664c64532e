use std::path::PathBuf;

use clap::{ArgAction, Parser};
use icon_grid::{ComposeError, ComposeOutcome, LayoutParams, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_ICONS_DIR: &str = "assets/icons";
const DEFAULT_OUTPUT: &str = "assets/dist/skills.svg";
const NO_ICONS_WARNING: &str = "warning: no SVG files found in icons directory";

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;
    let params = LayoutParams::default();

    if cli.dry_run {
        match icon_grid::plan(&cli.icons_dir, params)? {
            Some(report) => println!("{}", serde_json::to_string_pretty(&report)?),
            None => eprintln!("{NO_ICONS_WARNING}"),
        }
        return Ok(());
    }

    match icon_grid::compose(&cli.icons_dir, &cli.output, params)? {
        ComposeOutcome::Written { icon_count, output } => {
            println!("Successfully generated combined SVG with {icon_count} icons.");
            println!("Output: {}", output.display());
        }
        ComposeOutcome::NoIcons => eprintln!("{NO_ICONS_WARNING}"),
    }
    Ok(())
}

fn init_logging(verbosity: u8) -> Result<()> {
    let default_level = match verbosity {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| ComposeError::Logging(err.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Combine a directory of SVG icons into a single grid image."
)]
struct Cli {
    /// Directory holding the icon files.
    #[arg(long, default_value = DEFAULT_ICONS_DIR)]
    icons_dir: PathBuf,

    /// Path of the combined SVG.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print the computed layout as JSON instead of writing the output.
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}
