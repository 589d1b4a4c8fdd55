//! Environment variable lookup, abstracted so resolution can be tested
//! without touching the process environment.

use std::env::{self, VarError};

use tracing::debug;

/// Read-only view of environment variables.
pub trait EnvSource {
  /// Value of `name`, or `None` when it is unset.
  fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
  fn var(&self, name: &str) -> Option<String> {
    match env::var(name) {
      Ok(value) => Some(value),
      Err(VarError::NotPresent) => None,
      Err(VarError::NotUnicode(_)) => {
        debug!("Ignoring {name}: value is not valid Unicode");
        None
      }
    }
  }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
  fn var(&self, name: &str) -> Option<String> {
    (**self).var(name)
  }
}
