//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use padcalc::core::NumberStyle;

/// padcalc: keypad calculator in the terminal
#[derive(Parser, Debug)]
#[command(name = "padcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Result number style
    #[arg(long, value_enum, default_value = "canonical", global = true)]
    pub style: StyleArg,

    /// Ignore a second decimal point within one number
    #[arg(long, global = true)]
    pub single_dot: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keys in order and print the display
    Press(PressArgs),

    /// Read keys from stdin line by line
    Repl,

    /// Print the keypad
    Keys,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Button labels: 0-9 . + - * / sqrt = C
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,

    /// Print the final session state as JSON
    #[arg(long, conflicts_with = "trace")]
    pub json: bool,
}

/// Result number style argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StyleArg {
    /// 5.0 for integral results
    #[default]
    Canonical,
    /// 5 for integral results
    Trimmed,
}

impl From<StyleArg> for NumberStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Canonical => Self::Canonical,
            StyleArg::Trimmed => Self::Trimmed,
        }
    }
}
