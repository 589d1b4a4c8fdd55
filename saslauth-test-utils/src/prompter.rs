//! Scripted prompter for testing
//!
//! Replays queued answers instead of reading a terminal and records every
//! prompt it was asked to show, so tests can assert both what was resolved
//! and whether a prompt happened at all.

use std::collections::VecDeque;

use saslauth_core::{AuthError, Prompter};

/// Whether a prompt echoed its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
  Visible,
  Masked,
}

/// A prompt the resolver issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRecord {
  pub label: String,
  pub kind: PromptKind,
}

/// In-memory [`Prompter`].
///
/// Each queued answer is consumed by one read. `None` in the queue, or an
/// exhausted queue, behaves like a closed input stream.
#[derive(Debug, Clone)]
pub struct ScriptedPrompter {
  interactive: bool,
  answers: VecDeque<Option<String>>,
  prompts: Vec<PromptRecord>,
}

impl Default for ScriptedPrompter {
  fn default() -> Self {
    Self::new()
  }
}

impl ScriptedPrompter {
  /// An interactive prompter with no answers queued.
  pub fn new() -> Self {
    Self {
      interactive: true,
      answers: VecDeque::new(),
      prompts: Vec::new(),
    }
  }

  /// A prompter that reports no terminal attached.
  pub fn detached() -> Self {
    Self {
      interactive: false,
      ..Self::new()
    }
  }

  /// Queue an answer for the next read.
  pub fn answer(mut self, value: &str) -> Self {
    self.answers.push_back(Some(value.to_string()));
    self
  }

  /// Queue an end-of-input for the next read.
  pub fn end_of_input(mut self) -> Self {
    self.answers.push_back(None);
    self
  }

  /// Prompts issued so far, in order.
  pub fn prompts(&self) -> &[PromptRecord] {
    &self.prompts
  }

  fn next(&mut self, label: &str, kind: PromptKind) -> Result<Option<String>, AuthError> {
    assert!(self.interactive, "read attempted on a detached prompter: {label}");
    self.prompts.push(PromptRecord {
      label: label.to_string(),
      kind,
    });
    Ok(self.answers.pop_front().flatten())
  }
}

impl Prompter for ScriptedPrompter {
  fn is_interactive(&self) -> bool {
    self.interactive
  }

  fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AuthError> {
    self.next(prompt, PromptKind::Visible)
  }

  fn read_secret(&mut self, prompt: &str) -> Result<Option<String>, AuthError> {
    self.next(prompt, PromptKind::Masked)
  }
}
