//! Launch a local Chroma server with project defaults.

pub mod cli;
pub mod config;
pub mod error;
pub mod invocation;
pub mod launcher;

pub use error::{LaunchError, Result};
pub use invocation::Invocation;
pub use launcher::Launcher;
