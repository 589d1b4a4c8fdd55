//! # Output Formatting
//!
//! Writes the encoded line to stdout and styles diagnostics on stderr.
//! Only the encoded line ever goes to stdout, so the output can be piped
//! straight into a clipboard tool or a protocol session.

use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream};

use crate::credential::EncodedMessage;
use crate::mechanism::Mechanism;

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode to diagnostics and prompt styling. `Auto` leaves
  /// terminal detection in place.
  pub fn apply(self) {
    let enabled = match self {
      ColorMode::Always | ColorMode::Yes => true,
      ColorMode::Never | ColorMode::No => false,
      ColorMode::Auto => return,
    };
    owo_colors::set_override(enabled);
    console::set_colors_enabled_stderr(enabled);
  }
}

/// Write the mechanism's output line followed by a newline, then flush.
pub fn emit<W: Write>(mechanism: Mechanism, message: &EncodedMessage, mut writer: W) -> io::Result<()> {
  writeln!(writer, "{}", mechanism.format_line(message))?;
  writer.flush()
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print an error message to stderr
#[allow(clippy::print_stderr)]
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!(
    "{} {}",
    cross.if_supports_color(Stream::Stderr, |t| t.red().bold().to_string()),
    message
  );
}

/// Print a warning message to stderr
#[allow(clippy::print_stderr)]
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  eprintln!(
    "{} {}",
    warning.if_supports_color(Stream::Stderr, |t| t.yellow().bold().to_string()),
    message
  );
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mechanism::{encode_plain, encode_xoauth2};

  #[test]
  fn test_get_emoji_or_default() {
    let check = get_emoji_or_default("cross_mark", "✗");
    assert!(!check.is_empty());

    let fallback = get_emoji_or_default("not_a_real_emoji_name", "fallback");
    assert_eq!(fallback, "fallback");
  }

  #[test]
  fn test_emit_plain_line() {
    let mut out = Vec::new();
    emit(Mechanism::Plain, &encode_plain("alice@example.com", "s3cret"), &mut out).unwrap();
    assert_eq!(
      String::from_utf8(out).unwrap(),
      "AUTH PLAIN AGFsaWNlQGV4YW1wbGUuY29tAHMzY3JldA==\n"
    );
  }

  #[test]
  fn test_emit_xoauth2_line_is_bare() {
    let mut out = Vec::new();
    emit(Mechanism::XOAuth2, &encode_xoauth2("bob@example.com", "ya29.abc"), &mut out).unwrap();
    assert_eq!(
      String::from_utf8(out).unwrap(),
      "dXNlcj1ib2JAZXhhbXBsZS5jb20BYXV0aD1CZWFyZXIgeWEyOS5hYmMBAQ==\n"
    );
  }
}
