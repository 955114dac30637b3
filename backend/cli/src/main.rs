mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use daylog::{Color, Console, Level, LogOptions, Logger, StdConsole};

#[derive(Debug, Parser)]
#[command(name = "daylog")]
#[command(about = "Print a leveled, colored log line and optionally append it to today's log file")]
#[command(version)]
struct Cli {
    /// YAML or JSON file with logger settings (`logPath`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for daily log files; overrides the config file and DAYLOG_LOG_PATH
    #[arg(long)]
    log_path: Option<PathBuf>,

    /// Severity: log, info, success, warn or error
    level: Level,

    /// Message text; multiple words are joined with spaces
    #[arg(required = true)]
    message: Vec<String>,

    /// Label to print instead of the uppercased level
    #[arg(long)]
    name: Option<String>,

    /// Also append the record to today's JSON log file
    #[arg(long)]
    to_file: bool,

    /// With the error level, exit non-zero after logging
    #[arg(long)]
    raise: bool,

    /// Label color, e.g. fg-magenta or bg-blue
    #[arg(long)]
    color: Option<Color>,
}

impl Cli {
    fn options(&self) -> LogOptions {
        LogOptions {
            name: self.name.clone(),
            log_to_file: self.to_file,
            raise: self.raise,
            color: self.color,
        }
    }
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never mix with the log lines on stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let cli = Cli::parse();
    run(cli, StdConsole)
}

fn run(cli: Cli, console: impl Console + 'static) -> Result<()> {
    let env = std::env::vars().collect();
    let config = config::resolve(&env, cli.config.as_deref(), cli.log_path.clone())?;
    let logger = Logger::with_console(config, console);

    logger.log_at(cli.level, cli.message.join(" "), cli.options())?;
    Ok(())
}
