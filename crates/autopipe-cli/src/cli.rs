//! Argument parsing and dispatch for the `autopipe` binary.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use autopipe_config::CommandCatalog;
use autopipe_fsops::model::DEFAULT_HTTP_TIMEOUT;
use autopipe_fsops::{FileOperationService, ServiceConfig};
use autopipe_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
use clap::{Parser, ValueEnum};
use tracing::error;

use crate::console::TerminalConsole;
use crate::interactive::run_interactive;
use crate::oneshot::run_oneshot;

const UNEXPECTED_ERROR: &str = "An unexpected error occurred:";

#[derive(Parser, Debug)]
#[command(
    name = "autopipe",
    version,
    about = "File automation console: interactive menu or one-shot commands",
    after_help = "Run without a command for the interactive menu, or pass a command \
                  followed by --key value pairs, e.g. `autopipe copyfile --source a.txt \
                  --destination b.txt`."
)]
struct Cli {
    #[arg(
        long,
        env = "AUTOPIPE_LOG_LEVEL",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log filter used when RUST_LOG is unset"
    )]
    log_level: String,
    #[arg(
        long,
        env = "AUTOPIPE_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormatArg::Pretty
    )]
    log_format: LogFormatArg,
    #[arg(
        long,
        env = "AUTOPIPE_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_HTTP_TIMEOUT.as_secs(),
        help = "Timeout for a single download request"
    )]
    http_timeout_secs: u64,
    #[arg(
        long,
        env = "AUTOPIPE_CATALOG",
        help = "Command catalog JSON file shown by the menu"
    )]
    catalog: Option<PathBuf>,
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND",
        help = "One-shot command and its --key value pairs"
    )]
    command: Vec<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    #[default]
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
        }
    }
}

/// Entry point used by the binary. Returns the process exit code, which is
/// zero whenever arguments parse.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.into(),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }

    if let Err(err) = dispatch(&cli) {
        error!(error = %err, detail = ?err, "unexpected failure");
        println!("{UNEXPECTED_ERROR} {err:#}");
    }
    0
}

fn dispatch(cli: &Cli) -> Result<()> {
    let service = FileOperationService::new(ServiceConfig {
        http_timeout: Duration::from_secs(cli.http_timeout_secs),
    });

    if cli.command.is_empty() {
        let catalog = CommandCatalog::load_or_embedded(cli.catalog.as_deref())
            .context("command catalog is unusable")?;
        let mut console = TerminalConsole::stdio();
        run_interactive(&mut console, &catalog, &service).context("console I/O failed")?;
    } else {
        let rendered = run_oneshot(&service, &cli.command);
        writeln!(io::stdout().lock(), "{rendered}").context("failed to write command output")?;
    }
    Ok(())
}
