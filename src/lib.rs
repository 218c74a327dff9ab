//! Front end for the Lox scripting language.
//!
//! A scanner that turns source text into classified tokens, an
//! expression tree, and a visitor protocol for adding operations over
//! that tree without touching the node types.
//!
//! # Quick start
//!
//! ## Scan source text
//!
//! ```
//! use lox_front::{TokenKind, tokenize};
//!
//! let scan = tokenize("var answer = 42;");
//! assert!(scan.is_ok());
//! assert_eq!(scan.tokens[0].kind, TokenKind::Var);
//! assert_eq!(scan.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```
//!
//! ## Build and print a tree
//!
//! ```
//! use lox_front::{Expr, Token, TokenKind, print};
//!
//! let expr = Expr::binary(
//!     Expr::unary(Token::symbol(TokenKind::Minus, 1), Expr::literal(123.0)),
//!     Token::symbol(TokenKind::Star, 1),
//!     Expr::grouping(Expr::literal(45.67)),
//! );
//! assert_eq!(print(&expr), "(* (- 123) (group 45.67))");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::io;
use std::path::PathBuf;

pub mod ast;
pub mod builder;
pub mod lexer;
pub mod printer;
pub mod report;
pub mod runner;
pub mod token;

pub use ast::{Expr, Value, Visitor};
pub use lexer::{Scan, ScanError, ScanErrorKind, scan, tokenize};
pub use printer::{AstPrinter, RpnPrinter, print, print_rpn};
pub use report::{ConsoleReporter, Reporter};
pub use runner::{Outcome, run_file, run_prompt, run_source};
pub use token::{Literal, Token, TokenKind};

/// Errors from driving a run. Scan errors are never returned here;
/// they go through a [`Reporter`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The script could not be read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing output or reading a prompt line failed.
    #[error("{0}")]
    Io(#[from] io::Error),
}
