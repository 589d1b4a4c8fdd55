//! # SASL Mechanisms
//!
//! Byte layouts for the PLAIN (RFC 4616) and XOAUTH2 initial responses.
//! Both encoders are pure: the same credential always yields the same
//! [`EncodedMessage`].

use std::fmt;

use crate::config::MechanismConfig;
use crate::consts::{AUTH_PLAIN_PREFIX, BEARER_SCHEME};
use crate::credential::{Credential, EncodedMessage};

/// Separator between XOAUTH2 key/value pairs (`^A`).
const CTRL_A: char = '\u{1}';

/// Encode a PLAIN initial response: `NUL identity NUL secret`.
///
/// The authorization identity is left empty. NUL bytes inside either field
/// are not rejected and will end up in the output unchanged.
pub fn encode_plain(identity: &str, secret: &str) -> EncodedMessage {
  let mut raw = Vec::with_capacity(identity.len() + secret.len() + 2);
  raw.push(0);
  raw.extend_from_slice(identity.as_bytes());
  raw.push(0);
  raw.extend_from_slice(secret.as_bytes());
  EncodedMessage::from_raw(&raw)
}

/// Encode an XOAUTH2 initial response:
/// `user=<identity> ^A auth=Bearer <token> ^A ^A`.
pub fn encode_xoauth2(identity: &str, access_token: &str) -> EncodedMessage {
  let raw = format!("user={identity}{CTRL_A}auth={BEARER_SCHEME} {access_token}{CTRL_A}{CTRL_A}");
  EncodedMessage::from_raw(raw.as_bytes())
}

/// Supported SASL mechanisms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism {
  Plain,
  XOAuth2,
}

impl Mechanism {
  /// Registered mechanism name as it appears after `AUTH`.
  pub const fn name(self) -> &'static str {
    match self {
      Mechanism::Plain => "PLAIN",
      Mechanism::XOAuth2 => "XOAUTH2",
    }
  }

  /// Default credential sources for this mechanism.
  pub fn default_config(self) -> MechanismConfig {
    match self {
      Mechanism::Plain => MechanismConfig::plain(),
      Mechanism::XOAuth2 => MechanismConfig::xoauth2(),
    }
  }

  pub fn encode(self, credential: &Credential) -> EncodedMessage {
    match self {
      Mechanism::Plain => encode_plain(credential.identity(), credential.secret()),
      Mechanism::XOAuth2 => encode_xoauth2(credential.identity(), credential.secret()),
    }
  }

  /// Render the line an operator pastes into a session.
  ///
  /// PLAIN carries the `AUTH PLAIN` command so it can be sent inline.
  /// XOAUTH2 is bare because it is sent as the initial response of an
  /// `AUTH XOAUTH2` exchange.
  pub fn format_line(self, message: &EncodedMessage) -> String {
    match self {
      Mechanism::Plain => format!("{AUTH_PLAIN_PREFIX}{message}"),
      Mechanism::XOAuth2 => message.to_string(),
    }
  }
}

impl fmt::Display for Mechanism {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_plain_alice_scenario() {
    let message = encode_plain("alice@example.com", "s3cret");
    insta::assert_snapshot!(message.as_str(), @"AGFsaWNlQGV4YW1wbGUuY29tAHMzY3JldA==");
    assert_eq!(message.decode().unwrap(), b"\0alice@example.com\0s3cret");
  }

  #[test]
  fn test_xoauth2_bob_scenario() {
    let message = encode_xoauth2("bob@example.com", "ya29.abc");
    insta::assert_snapshot!(
      message.as_str(),
      @"dXNlcj1ib2JAZXhhbXBsZS5jb20BYXV0aD1CZWFyZXIgeWEyOS5hYmMBAQ=="
    );
    assert_eq!(
      message.decode().unwrap(),
      b"user=bob@example.com\x01auth=Bearer ya29.abc\x01\x01"
    );
  }

  #[test]
  fn test_plain_layout_for_varied_inputs() {
    let cases = [
      ("", ""),
      ("user", ""),
      ("", "pw"),
      ("josé@example.com", "päss wörd"),
      ("a b\tc", "line\nbreak"),
    ];

    for (identity, secret) in cases {
      let mut expected = vec![0u8];
      expected.extend_from_slice(identity.as_bytes());
      expected.push(0);
      expected.extend_from_slice(secret.as_bytes());

      assert_eq!(encode_plain(identity, secret).decode().unwrap(), expected);
    }
  }

  #[test]
  fn test_xoauth2_layout_for_varied_inputs() {
    let cases = [("", ""), ("user@example.com", "tok/en+=="), ("josé@example.com", "ü")];

    for (identity, token) in cases {
      let expected = format!("user={identity}\x01auth=Bearer {token}\x01\x01");
      assert_eq!(encode_xoauth2(identity, token).decode().unwrap(), expected.as_bytes());
    }
  }

  #[test]
  fn test_plain_keeps_embedded_nul() {
    let message = encode_plain("a\0b", "c");
    assert_eq!(message.decode().unwrap(), b"\0a\0b\0c");
  }

  #[test]
  fn test_empty_plain_is_two_nuls() {
    assert_eq!(encode_plain("", "").as_str(), "AAA=");
  }

  #[test]
  fn test_encoding_is_repeatable() {
    let credential = Credential::new("alice@example.com", "s3cret");
    for mechanism in [Mechanism::Plain, Mechanism::XOAuth2] {
      assert_eq!(mechanism.encode(&credential), mechanism.encode(&credential));
    }
  }

  #[test]
  fn test_mechanism_dispatches_to_encoder() {
    let credential = Credential::new("bob@example.com", "ya29.abc");
    assert_eq!(
      Mechanism::Plain.encode(&credential),
      encode_plain("bob@example.com", "ya29.abc")
    );
    assert_eq!(
      Mechanism::XOAuth2.encode(&credential),
      encode_xoauth2("bob@example.com", "ya29.abc")
    );
  }

  #[test]
  fn test_format_line_prefixes_plain_only() {
    let message = encode_plain("alice@example.com", "s3cret");
    assert_eq!(
      Mechanism::Plain.format_line(&message),
      "AUTH PLAIN AGFsaWNlQGV4YW1wbGUuY29tAHMzY3JldA=="
    );
    assert_eq!(
      Mechanism::XOAuth2.format_line(&message),
      "AGFsaWNlQGV4YW1wbGUuY29tAHMzY3JldA=="
    );
  }

  #[test]
  fn test_names() {
    assert_eq!(Mechanism::Plain.to_string(), "PLAIN");
    assert_eq!(Mechanism::XOAuth2.to_string(), "XOAUTH2");
    assert_eq!(Mechanism::XOAuth2.default_config().secret_env, "OAUTH_ACCESS");
  }
}
