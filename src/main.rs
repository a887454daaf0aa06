//! Mining agent configuration checker.
//!
//! Loads an agent configuration file, runs initialization (which logs the
//! effective options and pools) and optionally prints the result.
//!
//! ```text
//! agent-config -c agent_conf.json --print
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use agent_config::config::load_config;
use agent_config::observability::logging::init_logging;
use agent_config::TracingSink;

#[derive(Parser, Debug)]
#[command(author, version, about = "Mining agent configuration loader", long_about = None)]
struct Args {
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to the JSON (or .toml) configuration file",
        default_value = "agent_conf.json"
    )]
    config_path: PathBuf,

    #[arg(short = 'l', long = "log-file", help = "Also append logs to this file")]
    log_file: Option<PathBuf>,

    #[arg(long, help = "Print the effective configuration as JSON")]
    print: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.as_deref()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!(path = %args.config_path.display(), "Loading configuration");

    let config = match load_config(&args.config_path, &mut TracingSink) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        listen_ip = %config.agent_listen_ip,
        listen_port = config.agent_listen_port,
        pools = config.pools.len(),
        "Configuration loaded"
    );

    if args.print {
        match config.to_json_pretty() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                tracing::error!(error = %e, "Failed to render configuration");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
