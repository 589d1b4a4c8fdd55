//! # Prompts Module
//!
//! The prompting capability used by the resolver, plus the terminal-backed
//! implementation and the dialoguer theme that styles its labels.
//!
//! Prompts are drawn on stderr so that stdout carries nothing but the
//! encoded line.

use std::io::{self, BufRead, IsTerminal};

use console::{Style, Term};
use dialoguer::theme::{ColorfulTheme, Theme};

use crate::error::AuthError;

/// Source of interactively entered values.
///
/// Both reads return `Ok(None)` when the input stream ends before any data
/// arrives. An empty line is `Ok(Some(String::new()))`.
pub trait Prompter {
  /// Whether an interactive terminal is attached. The resolver checks this
  /// before calling either read method.
  fn is_interactive(&self) -> bool;

  /// Read one line with echo enabled.
  fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AuthError>;

  /// Read one line with echo disabled.
  fn read_secret(&mut self, prompt: &str) -> Result<Option<String>, AuthError>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
  fn is_interactive(&self) -> bool {
    (**self).is_interactive()
  }

  fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AuthError> {
    (**self).read_line(prompt)
  }

  fn read_secret(&mut self, prompt: &str) -> Result<Option<String>, AuthError> {
    (**self).read_secret(prompt)
  }
}

/// Returns the dialoguer theme used for saslauth's prompt labels.
///
/// Features:
/// - Cyan bold prompt text
/// - Styles resolved against stderr, where prompts are drawn
pub fn saslauth_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().for_stderr().cyan().bold(),
    ..ColorfulTheme::default()
  }
}

/// Prompter bound to the controlling terminal.
pub struct TerminalPrompter {
  term: Term,
  theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
  fn default() -> Self {
    Self::new()
  }
}

impl TerminalPrompter {
  pub fn new() -> Self {
    Self {
      term: Term::stderr(),
      theme: saslauth_theme(),
    }
  }

  fn draw(&self, rendered: &str) -> Result<(), AuthError> {
    self.term.write_str(rendered)?;
    self.term.flush()?;
    Ok(())
  }
}

impl Prompter for TerminalPrompter {
  fn is_interactive(&self) -> bool {
    self.term.is_term() && io::stdin().is_terminal()
  }

  fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AuthError> {
    let mut rendered = String::new();
    self
      .theme
      .format_input_prompt(&mut rendered, prompt, None)
      .map_err(io::Error::other)?;
    self.draw(&rendered)?;

    Ok(read_line_from(io::stdin().lock())?)
  }

  fn read_secret(&mut self, prompt: &str) -> Result<Option<String>, AuthError> {
    let mut rendered = String::new();
    self
      .theme
      .format_password_prompt(&mut rendered, prompt)
      .map_err(io::Error::other)?;
    self.draw(&rendered)?;

    match rpassword::read_password() {
      Ok(secret) => Ok(Some(secret)),
      Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
      Err(e) => Err(e.into()),
    }
  }
}

/// Read one line, without its line ending. Zero bytes read means the stream
/// is closed and yields `None`.
fn read_line_from<R: BufRead>(mut reader: R) -> io::Result<Option<String>> {
  let mut line = String::new();
  if reader.read_line(&mut line)? == 0 {
    return Ok(None);
  }
  Ok(Some(strip_line_ending(line)))
}

fn strip_line_ending(mut line: String) -> String {
  if line.ends_with('\n') {
    line.pop();
    if line.ends_with('\r') {
      line.pop();
    }
  }
  line
}
