//! Runs calculator sessions against terminal input and output

use crate::commands::PressArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use padcalc::core::Calculator;
use padcalc::keypad::Keypad;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Width of the key column in `--trace` output
const KEY_COLUMN: usize = 6;

/// Presses every key in order. Stops at the first unknown key.
pub fn run_press<W: Write>(config: &CliConfig, args: &PressArgs, out: &mut W) -> CliResult<()> {
    let mut calc = Calculator::with_config(config.calc);
    info!(keys = args.keys.len(), "pressing keys");

    for label in &args.keys {
        calc.press_label(label)?;
        if args.trace {
            writeln!(out, "{label:>KEY_COLUMN$} | {}", calc.display())?;
        }
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, calc.state())?;
        writeln!(out)?;
    } else if !args.trace {
        writeln!(out, "{}", calc.display())?;
    }
    Ok(())
}

/// Reads whitespace separated keys line by line and prints the display
/// after each line. Unknown keys are reported on `err` and skipped.
pub fn run_repl<R, W, E>(config: &CliConfig, input: R, out: &mut W, err: &mut E) -> CliResult<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut calc = Calculator::with_config(config.calc);
    info!("session started");

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            break;
        }

        for label in line.split_whitespace() {
            if let Err(e) = calc.press_label(label) {
                warn!(error = %e, "key rejected");
                writeln!(err, "Error: {e}")?;
            }
        }
        writeln!(out, "{}", calc.display())?;
        out.flush()?;
    }

    info!("session ended");
    Ok(())
}

/// Prints the standard keypad
pub fn run_keys<W: Write>(out: &mut W) -> CliResult<()> {
    writeln!(out, "{}", Keypad::standard().render())?;
    Ok(())
}
