use app_common::Level;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

/// Shared HTTP constants and colorized console logger
#[derive(Debug, Parser)]
#[command(
    name = "app-common",
    version,
    about = "Emit colorized structured log lines and look up shared HTTP constants",
    long_about = "A small companion tool for the app-common library: writes one log entry through the console logger, or prints the error message paired with an HTTP status code."
)]
pub struct Cli {
    /// Enable verbose output (debug level)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Suppress non-error output (error level only)
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write one log entry (fatal exits with status 1, panic unwinds)
    Emit {
        /// Log level: debug, info, warn, error, panic, fatal
        level: Level,
        /// Log message
        message: String,
        /// Structured field as key=value (repeatable)
        #[arg(short = 'f', long = "field")]
        fields: Vec<String>,
        /// Logger configuration file path
        #[arg(short = 'c', long = "config", conflicts_with = "default_init")]
        config: Option<String>,
        /// Initialize with the fixed defaults of init_logger() instead of a config
        #[arg(long = "default-init", hide = true)]
        default_init: bool,
    },
    /// Print the error message paired with an HTTP status code
    Status {
        /// HTTP status code
        code: u16,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completions
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
    }
}
