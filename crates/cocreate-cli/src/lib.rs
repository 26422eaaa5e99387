// Library interface for cocreate-cli so integration tests can reach the
// argument parser and the helpers behind each subcommand.

pub mod app;
pub mod cli;

pub use cli::{Cli, Command, GenerateArgs, ProjectsAction};
