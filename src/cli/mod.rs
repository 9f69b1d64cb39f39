/// CLI argument parsing and command handling - Gateway
mod args;
mod commands;
mod output;

pub use args::{Cli, Commands};
pub use commands::handle_command;
pub use output::write_json;
