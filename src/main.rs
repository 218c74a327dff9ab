//! `lox` command: scan a script, or each line typed at a prompt, and
//! print the resulting tokens.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use lox_front::runner::sample_expression;
use lox_front::{Error, Outcome, print, print_rpn, run_file, run_prompt};
use tracing_subscriber::EnvFilter;

// sysexits(3) codes.
const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_NOINPUT: u8 = 66;
const EX_IOERR: u8 = 74;

#[derive(Parser, Debug)]
#[command(name = "lox", version, about = "Scan Lox source and print its tokens")]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print the reference expression tree in both notations and exit.
    #[arg(long, conflicts_with = "script")]
    sample: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EX_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    if cli.sample {
        let expr = sample_expression();
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", print(&expr));
        let _ = writeln!(out, "{}", print_rpn(&expr));
        return ExitCode::SUCCESS;
    }

    let result = match &cli.script {
        Some(path) => run_file(path, &mut io::stdout().lock(), io::stderr()),
        None => run_prompt(io::stdin().lock(), &mut io::stdout().lock(), io::stderr())
            .map(|()| Outcome::Clean),
    };

    match result {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::HadErrors) => ExitCode::from(EX_DATAERR),
        Err(e @ Error::Read { .. }) => {
            eprintln!("Error: {e}");
            ExitCode::from(EX_NOINPUT)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EX_IOERR)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
