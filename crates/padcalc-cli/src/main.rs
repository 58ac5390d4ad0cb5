//! padcalc: keypad calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! padcalc press 2 + 3 =          # prints 5.0
//! padcalc press --trace 9 sqrt   # display after every key
//! padcalc --style trimmed press 6 '*' 7 =
//! padcalc repl                   # keys from stdin, one line at a time
//! padcalc keys                   # show the keypad
//! ```

use clap::Parser;
use padcalc::config::CalcConfig;
use padcalc_cli::{
    logging, run_keys, run_press, run_repl, Cli, CliConfig, CliResult, Commands, Verbosity,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init_tracing(config.verbosity);

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Press(args) => run_press(&config, &args, &mut stdout),
        Commands::Repl => run_repl(&config, io::stdin().lock(), &mut stdout, &mut io::stderr()),
        Commands::Keys => run_keys(&mut stdout),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let calc = CalcConfig::new().with_number_style(cli.style.into());
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_calc(calc)
        .with_single_dot(cli.single_dot)
}
