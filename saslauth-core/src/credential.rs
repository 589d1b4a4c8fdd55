//! # Credential Model
//!
//! The resolved identity/secret pair and the Base64 message produced from it.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// A fully resolved identity and secret.
///
/// The secret is a password for PLAIN and a bearer access token for XOAUTH2.
/// Empty values are allowed; embedded NUL bytes are kept as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
  identity: String,
  secret: String,
}

impl Credential {
  pub fn new(identity: impl Into<String>, secret: impl Into<String>) -> Self {
    Self {
      identity: identity.into(),
      secret: secret.into(),
    }
  }

  /// The authentication identity (email address or username).
  pub fn identity(&self) -> &str {
    &self.identity
  }

  pub fn secret(&self) -> &str {
    &self.secret
  }

  /// Whether either field carries a NUL byte, which PLAIN uses as its field
  /// separator.
  pub fn contains_nul(&self) -> bool {
    self.identity.contains('\0') || self.secret.contains('\0')
  }
}

impl fmt::Debug for Credential {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credential")
      .field("identity", &self.identity)
      .field("secret", &"<redacted>")
      .finish()
  }
}

/// Base64 text produced by a mechanism encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMessage(String);

impl EncodedMessage {
  /// Encode raw mechanism bytes with the standard padded alphabet.
  pub(crate) fn from_raw(raw: &[u8]) -> Self {
    Self(STANDARD.encode(raw))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_string(self) -> String {
    self.0
  }

  /// Decode back to the raw mechanism bytes.
  pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(&self.0)
  }
}

impl fmt::Display for EncodedMessage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
