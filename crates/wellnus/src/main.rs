//! wellnus - A text-driven personal wellness assistant
//!
//! "Look after yourself, one command at a time."
//!
//! Usage:
//!   wellnus                       Start the interactive shell
//!   wellnus --data-dir DIR        Keep saved state somewhere else
//!   wellnus --config FILE         Read settings from FILE
//!   wellnus --write-config        Write the settings in effect and exit
//!
//! Inside the shell:
//!   focus                         Focus Timer (start, pause, resume, next, config, ...)
//!   reflect                       Self Reflection (get, like, fav)
//!   help                          List features
//!   exit                          Leave

mod content;
mod shell;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use focus::{FocusManager, SystemClock};
use reflect::{QuestionList, ReflectManager};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wellnus_core::{Config, Feature, Paths, Storage};

use shell::Shell;

/// WellNUS++ - a text-driven personal wellness assistant
#[derive(Parser)]
#[command(name = "wellnus")]
#[command(about = "A text-driven personal wellness assistant")]
#[command(version)]
#[command(after_help = r#"FEATURES:
    focus      Focus Timer: work/break cycles with a long break at the end
    reflect    Self Reflection: random questions and a favourites list

EXAMPLES:
    focus                              # enter Focus Timer
    config --cycle 3 --work 20         # inside focus: 3 cycles of 20 minutes
    start                              # inside focus: begin
    home                               # back to the main menu

LOGGING:
    Set RUST_LOG (e.g. RUST_LOG=focus=debug) or pass --verbose.
"#)]
struct Cli {
    /// Directory for saved feature state
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Configuration file (default: ~/.config/wellnus/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Do not load or save line history
    #[arg(long)]
    no_history: bool,

    /// Write the settings in effect to the config file and exit
    #[arg(long)]
    write_config: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut paths = Paths::new();
    if let Some(dir) = cli.data_dir {
        paths.data = dir;
    }
    let config_path = cli.config.unwrap_or_else(|| paths.config_file());
    let config = Config::load(&config_path)?;

    if cli.write_config {
        config.save(&config_path)?;
        println!("Wrote settings to {}", config_path.display());
        return Ok(());
    }

    let storage = match Storage::new(&paths.data) {
        Ok(storage) => Some(storage),
        Err(e) => {
            warn!(error = %e, dir = %paths.data.display(), "saving is disabled");
            None
        }
    };
    info!(data = %paths.data.display(), config = %config_path.display(), "starting wellnus");

    let features: Vec<Box<dyn Feature>> = vec![
        Box::new(FocusManager::from_defaults(
            &config.focus,
            Arc::new(SystemClock),
            storage.clone(),
        )),
        Box::new(ReflectManager::with_entropy(
            QuestionList::new(content::questions()),
            &config.reflect,
            storage,
        )),
    ];

    let history = (config.shell.history && !cli.no_history).then(|| paths.history_file());
    let mut shell = Shell::new(features);
    shell::run(&mut shell, history).context("Shell failed")
}
