use std::process::ExitCode;

use chroma_launcher::cli::Cli;
use chroma_launcher::config::Config;
use chroma_launcher::{Launcher, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(cli.log_level.as_deref(), config.log_level.as_deref());

    let executable = cli.executable.clone().unwrap_or(config.executable);
    let launcher = Launcher::new(executable);
    let invocation = cli.invocation();

    if cli.dry_run {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&launcher.plan(&invocation))?);
        } else {
            println!("{}", launcher.command_line(&invocation));
        }
        return Ok(());
    }

    launcher.run(&invocation)
}

fn init_tracing(cli_level: Option<&str>, config_level: Option<&str>) {
    let env_filter = cli_level
        .map(EnvFilter::try_new)
        .or_else(|| std::env::var("RUST_LOG").ok().map(EnvFilter::try_new))
        .or_else(|| config_level.map(EnvFilter::try_new))
        .and_then(std::result::Result::ok)
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
