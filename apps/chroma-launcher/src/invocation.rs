pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 8000;

/// Subcommand the Chroma CLI uses to start a server.
pub const SERVER_SUBCOMMAND: &str = "run";

/// Parameters handed to the server for a single launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    host: String,
    port: i64,
    path: String,
}

impl Invocation {
    pub fn new(host: impl Into<String>, port: i64, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            path: path.into(),
        }
    }

    /// Invocation with the default bind address for the given data path.
    pub fn with_path(path: impl Into<String>) -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT, path)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub const fn port(&self) -> i64 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn server_args(&self) -> Vec<String> {
        vec![
            SERVER_SUBCOMMAND.to_string(),
            "--host".to_string(),
            self.host.clone(),
            "--port".to_string(),
            self.port.to_string(),
            "--path".to_string(),
            self.path.clone(),
        ]
    }
}
