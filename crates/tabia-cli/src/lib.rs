//! Interactive console front-end for tabia.

pub mod command;
pub mod console;
pub mod error;

pub use command::{Command, parse_command};
pub use console::Console;
pub use error::CliError;
