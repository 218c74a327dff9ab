//! Drives the scanner over a script file or an interactive prompt.
//!
//! For now a run prints every token, one per line, in the order the
//! scanner produced them.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, info, trace};

use crate::Error;
use crate::ast::Expr;
use crate::lexer::scan;
use crate::report::{ConsoleReporter, Reporter};
use crate::token::{Token, TokenKind};

/// How a script run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    /// At least one scan error was reported.
    HadErrors,
}

/// Scan `source` and write each token's display form to `out`.
///
/// Scan errors go to `reporter`; only write failures are returned.
pub fn run_source<W, R>(source: &str, out: &mut W, reporter: &mut R) -> Result<(), Error>
where
    W: Write + ?Sized,
    R: Reporter + ?Sized,
{
    let tokens = scan(source, reporter);
    for token in &tokens {
        trace!(kind = %token.kind, line = token.line, "token");
        writeln!(out, "{token}")?;
    }
    Ok(())
}

/// Read and run a script file, reporting scan errors to `err`.
pub fn run_file<W, E>(path: &Path, out: &mut W, err: E) -> Result<Outcome, Error>
where
    W: Write + ?Sized,
    E: Write,
{
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = source.len(), "running script");

    let mut reporter = ConsoleReporter::new(err);
    run_source(&source, out, &mut reporter)?;

    if reporter.had_error() {
        Ok(Outcome::HadErrors)
    } else {
        Ok(Outcome::Clean)
    }
}

/// Run each line of `input` on its own until end of input.
///
/// An error on one line does not carry over to the next.
pub fn run_prompt<I, W, E>(input: I, out: &mut W, err: E) -> Result<(), Error>
where
    I: BufRead,
    W: Write + ?Sized,
    E: Write,
{
    let mut reporter = ConsoleReporter::new(err);
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        run_source(&line, out, &mut reporter)?;
        if reporter.had_error() {
            debug!("prompt line had scan errors");
        }
        reporter.reset();
    }

    Ok(())
}

/// The reference tree `-123 * (45.67)`.
#[must_use]
pub fn sample_expression() -> Expr {
    Expr::binary(
        Expr::unary(Token::symbol(TokenKind::Minus, 1), Expr::literal(123.0)),
        Token::symbol(TokenKind::Star, 1),
        Expr::grouping(Expr::literal(45.67)),
    )
}
