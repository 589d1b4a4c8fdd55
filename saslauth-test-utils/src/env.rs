//! Environment variable management for testing
//!
//! [`MapEnv`] stands in for the process environment when driving the
//! resolver directly. [`EnvVarGuard`] is for tests that must go through the
//! real process environment; it restores every variable it touched on drop.

use std::collections::HashMap;
use std::env;

use saslauth_core::EnvSource;

/// In-memory environment.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
  vars: HashMap<String, String>,
}

impl MapEnv {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style insert.
  pub fn with(mut self, name: &str, value: &str) -> Self {
    self.vars.insert(name.to_string(), value.to_string());
    self
  }
}

impl EnvSource for MapEnv {
  fn var(&self, name: &str) -> Option<String> {
    self.vars.get(name).cloned()
  }
}

/// Sets or removes process environment variables for the lifetime of the
/// guard.
///
/// Tests using this guard should pick variable names no other test touches,
/// since the process environment is shared between test threads.
pub struct EnvVarGuard {
  /// Original values, in the order they were first touched
  originals: Vec<(String, Option<String>)>,
}

impl Default for EnvVarGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl EnvVarGuard {
  pub fn new() -> Self {
    Self { originals: Vec::new() }
  }

  /// Set `name` to `value` until the guard is dropped.
  pub fn set(&mut self, name: &str, value: &str) -> &mut Self {
    self.remember(name);
    unsafe {
      env::set_var(name, value);
    }
    self
  }

  /// Unset `name` until the guard is dropped.
  pub fn remove(&mut self, name: &str) -> &mut Self {
    self.remember(name);
    unsafe {
      env::remove_var(name);
    }
    self
  }

  fn remember(&mut self, name: &str) {
    if !self.originals.iter().any(|(n, _)| n == name) {
      self.originals.push((name.to_string(), env::var(name).ok()));
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    // Restore original environment variables
    for (name, original) in self.originals.drain(..).rev() {
      match original {
        Some(val) => unsafe {
          env::set_var(&name, val);
        },
        None => unsafe {
          env::remove_var(&name);
        },
      }
    }
  }
}
