use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

use crate::invocation::{DEFAULT_HOST, DEFAULT_PORT, Invocation};

#[derive(Parser, Debug)]
#[command(name = "chroma-launcher")]
#[command(about = "Run a local Chroma server", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = DEFAULT_HOST, help = "Host the server binds to")]
    pub host: String,

    #[arg(
        long,
        default_value_t = DEFAULT_PORT,
        allow_negative_numbers = true,
        help = "Port the server binds to"
    )]
    pub port: i64,

    #[arg(
        long,
        value_parser = NonEmptyStringValueParser::new(),
        help = "Directory the server keeps its data in"
    )]
    pub path: String,

    #[arg(long, help = "Server executable to launch [default: chroma]")]
    pub executable: Option<String>,

    #[arg(long, value_name = "FILE", help = "Config file to load instead of the global one")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Log filter for the launcher (e.g. debug, info)")]
    pub log_level: Option<String>,

    #[arg(long, help = "Print the server command instead of running it")]
    pub dry_run: bool,

    #[arg(long, requires = "dry_run", help = "Print the dry-run command as JSON")]
    pub json: bool,
}

impl Cli {
    pub fn invocation(&self) -> Invocation {
        Invocation::new(self.host.clone(), self.port, self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults_with_path_only() {
        let cli = Cli::try_parse_from(["chroma-launcher", "--path", "/tmp/data"]).unwrap();
        assert_eq!(cli.invocation(), Invocation::with_path("/tmp/data"));
        assert!(cli.executable.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "chroma-launcher",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--path",
            "db",
            "--executable",
            "/opt/chroma",
        ])
        .unwrap();
        assert_eq!(cli.invocation(), Invocation::new("0.0.0.0", 9000, "db"));
        assert_eq!(cli.executable.as_deref(), Some("/opt/chroma"));
    }

    #[test]
    fn test_path_required() {
        let err = Cli::try_parse_from(["chroma-launcher", "--host", "0.0.0.0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = Cli::try_parse_from(["chroma-launcher", "--path", ""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_port_must_be_integer() {
        let err = Cli::try_parse_from(["chroma-launcher", "--path", "db", "--port", "http"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_negative_port_accepted() {
        let cli = Cli::try_parse_from(["chroma-launcher", "--path", "db", "--port", "-1"]).unwrap();
        assert_eq!(cli.port, -1);
        assert_eq!(cli.invocation().server_args()[3..5], ["--port", "-1"]);
    }

    #[test]
    fn test_json_requires_dry_run() {
        let err = Cli::try_parse_from(["chroma-launcher", "--path", "db", "--json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
