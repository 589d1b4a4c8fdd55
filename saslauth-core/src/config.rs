//! # Mechanism Configuration
//!
//! Per-mechanism defaults for where credentials come from: the environment
//! variables consulted and the labels shown when prompting. Nothing here
//! carries credential material.

use crate::consts::{ENV_OAUTH_ACCESS, ENV_OAUTH_USER, ENV_SASL_PASSWORD, ENV_SASL_USERNAME};

/// Sources consulted by the resolver for one mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MechanismConfig {
  /// Environment variable read when no identity argument is given.
  pub identity_env: String,
  /// Environment variable read when no secret argument is given.
  pub secret_env: String,
  /// Label for the visible identity prompt.
  pub identity_prompt: String,
  /// Label for the masked secret prompt.
  pub secret_prompt: String,
}

impl MechanismConfig {
  /// Defaults for SASL PLAIN.
  pub fn plain() -> Self {
    Self {
      identity_env: ENV_SASL_USERNAME.to_string(),
      secret_env: ENV_SASL_PASSWORD.to_string(),
      identity_prompt: "Username".to_string(),
      secret_prompt: "Password".to_string(),
    }
  }

  /// Defaults for SASL XOAUTH2.
  pub fn xoauth2() -> Self {
    Self {
      identity_env: ENV_OAUTH_USER.to_string(),
      secret_env: ENV_OAUTH_ACCESS.to_string(),
      identity_prompt: "User".to_string(),
      secret_prompt: "Access Token".to_string(),
    }
  }

  /// Read the identity from a different environment variable.
  pub fn with_identity_env(mut self, name: impl Into<String>) -> Self {
    self.identity_env = name.into();
    self
  }

  /// Read the secret from a different environment variable.
  pub fn with_secret_env(mut self, name: impl Into<String>) -> Self {
    self.secret_env = name.into();
    self
  }

  /// Human-readable name of the identity field, used in error messages.
  pub fn identity_field(&self) -> String {
    self.identity_prompt.to_lowercase()
  }

  /// Human-readable name of the secret field, used in error messages.
  pub fn secret_field(&self) -> String {
    self.secret_prompt.to_lowercase()
  }
}
