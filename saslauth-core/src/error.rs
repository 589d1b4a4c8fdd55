//! # Errors
//!
//! Failure taxonomy for credential resolution. Encoding itself cannot fail,
//! so every variant here originates in argument handling or prompting.

use std::io;

use thiserror::Error;

/// Errors that can occur while resolving a credential.
#[derive(Debug, Error)]
pub enum AuthError {
  /// More positional values were supplied than the two the tool accepts.
  #[error("{usage}")]
  InvalidArguments { usage: String },

  /// A prompt was required but no interactive terminal is attached.
  #[error(
    "no interactive terminal is attached; supply the {field} as an argument or via the {env_var} environment variable"
  )]
  TerminalUnavailable { field: String, env_var: String },

  /// The prompt's input stream closed before any data arrived.
  #[error("reached end of input while reading the {field}")]
  EndOfInput { field: String },

  /// Any other I/O failure while talking to the terminal.
  #[error(transparent)]
  Io(#[from] io::Error),
}

impl AuthError {
  /// Build the usage failure for a program accepting `[identity [secret]]`.
  pub fn invalid_arguments(program: &str) -> Self {
    Self::InvalidArguments {
      usage: format!("Usage: {program} [identity [secret]]"),
    }
  }
}
