mod cli;

use app_common::config::LoggerConfig;
use app_common::error::{ConfigError, Error, Result};
use std::path::Path;

fn main() -> Result<()> {
    use clap::Parser;
    let cli = cli::opts::Cli::parse();

    match &cli.command {
        Some(cli::opts::Commands::Emit {
            level,
            message,
            fields,
            config,
            default_init,
        }) => {
            let mut cfg = load_config(config.as_deref())?;
            if cli.verbose {
                cfg.level = "debug".to_string();
            } else if cli.quiet {
                cfg.level = "error".to_string();
            }
            cfg.validate()?;

            cli::emit::handle_emit(&cfg, *level, message, fields, *default_init, cli.verbose)
        }
        Some(cli::opts::Commands::Status { code }) => cli::status::handle_status(*code),
        Some(cli::opts::Commands::Completions { shell }) => {
            cli::opts::Cli::generate_completions(*shell);
            Ok(())
        }
        None => {
            print_help();
            std::process::exit(1);
        }
    }
}

fn load_config(config_path: Option<&str>) -> Result<LoggerConfig> {
    let Some(config_path) = config_path else {
        return Ok(LoggerConfig::default());
    };
    match LoggerConfig::from_file(Path::new(config_path)) {
        Ok(c) => Ok(c),
        Err(Error::Config(ConfigError::NotFound(_))) => {
            eprintln!("Configuration file not found: {config_path}, using default configuration");
            Ok(LoggerConfig::default())
        }
        Err(e) => Err(e),
    }
}

fn print_help() {
    eprintln!("\nUsage: app-common <COMMAND> [OPTIONS]");
    eprintln!("\nCommands:");
    eprintln!("  emit         Write one log entry");
    eprintln!("  status       Print the error message for an HTTP status code");
    eprintln!("  completions  Generate shell completion scripts");
    eprintln!("\nExamples:");
    eprintln!("  app-common emit info \"user created\" -f id=42");
    eprintln!("  app-common emit warn \"low disk\"");
    eprintln!("  app-common status 401");
    eprintln!("\nFor more help: app-common --help");
}
