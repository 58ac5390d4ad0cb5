//! padcalc CLI library
//!
//! Terminal presentation layer for the padcalc engine: press a key
//! sequence, run a line-based session on stdin, or print the keypad.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;

pub use commands::{Cli, Commands, PressArgs, StyleArg};
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::{run_keys, run_press, run_repl};
