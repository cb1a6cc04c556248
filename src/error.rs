// ABOUTME: Host-level error types; evaluation errors are ordinary Error values

use thiserror::Error;

/// Errors produced while turning source text into a syntax tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The parser could not make progress at this point in the source.
    #[error("unexpected input near '{0}'")]
    UnexpectedInput(String),
}
