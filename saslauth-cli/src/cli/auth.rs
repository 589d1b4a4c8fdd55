//! # Mechanism Commands
//!
//! Shared arguments and handler for the `plain` and `xoauth2` subcommands.
//! Both run the same pipeline: resolve the credential, encode it, print one
//! line.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use saslauth_core::{
  EnvSource, ExplicitArgs, Mechanism, ProcessEnv, Prompter, TerminalPrompter, emit, print_warning, resolve,
};
use tracing::info;

/// Arguments shared by every mechanism subcommand
#[derive(Args, Debug)]
pub struct AuthArgs {
  /// Read the identity from this environment variable instead of the default
  #[arg(long, value_name = "NAME")]
  pub identity_env: Option<String>,

  /// Read the secret from this environment variable instead of the default
  #[arg(long, value_name = "NAME")]
  pub secret_env: Option<String>,

  /// Identity, optionally followed by the secret
  #[arg(
    value_name = "IDENTITY [SECRET]",
    long_help = "Identity, optionally followed by the secret.\n\n\
             Values omitted here are read from the environment or prompted for.\n\
             Use `--` before values that start with a hyphen."
  )]
  pub values: Vec<String>,
}

/// Resolve, encode and print the initial response for `mechanism`
pub fn handle_auth_command(mechanism: Mechanism, args: AuthArgs) -> Result<()> {
  run_auth(mechanism, args, ProcessEnv, TerminalPrompter::new(), io::stdout().lock())
}

/// The mechanism pipeline over explicit adapters. `out` is only written once
/// the credential has resolved.
fn run_auth<E, P, W>(mechanism: Mechanism, args: AuthArgs, env: E, prompter: P, out: W) -> Result<()>
where
  E: EnvSource,
  P: Prompter,
  W: Write,
{
  let program = format!("saslauth {}", mechanism.name().to_lowercase());
  let explicit = ExplicitArgs::from_positionals(&program, args.values)?;

  let mut config = mechanism.default_config();
  if let Some(name) = args.identity_env {
    config = config.with_identity_env(name);
  }
  if let Some(name) = args.secret_env {
    config = config.with_secret_env(name);
  }

  let credential = resolve(explicit, &config, env, prompter)?;

  if mechanism == Mechanism::Plain && credential.contains_nul() {
    print_warning("The username or password contains a NUL byte; the server will split the fields differently.");
  }

  let message = mechanism.encode(&credential);
  info!("Encoded {mechanism} initial response ({} characters)", message.as_str().len());

  emit(mechanism, &message, out)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use saslauth_core::AuthError;
  use saslauth_test_utils::{MapEnv, ScriptedPrompter};

  use super::*;

  fn args(values: &[&str]) -> AuthArgs {
    AuthArgs {
      identity_env: None,
      secret_env: None,
      values: values.iter().map(|v| v.to_string()).collect(),
    }
  }

  #[test]
  fn test_end_of_input_on_secret_prints_nothing() {
    let mut out = Vec::new();

    let err = run_auth(
      Mechanism::Plain,
      args(&["alice@example.com"]),
      MapEnv::new(),
      ScriptedPrompter::new().end_of_input(),
      &mut out,
    )
    .unwrap_err();

    assert!(matches!(
      err.downcast_ref::<AuthError>(),
      Some(AuthError::EndOfInput { field }) if field == "password"
    ));
    assert!(out.is_empty());
  }

  #[test]
  fn test_end_of_input_on_identity_prints_nothing() {
    let mut out = Vec::new();

    let err = run_auth(
      Mechanism::XOAuth2,
      args(&[]),
      MapEnv::new(),
      ScriptedPrompter::new().end_of_input(),
      &mut out,
    )
    .unwrap_err();

    assert!(matches!(
      err.downcast_ref::<AuthError>(),
      Some(AuthError::EndOfInput { field }) if field == "user"
    ));
    assert!(out.is_empty());
  }

  #[test]
  fn test_too_many_values_prints_nothing() {
    let mut out = Vec::new();

    let err = run_auth(
      Mechanism::Plain,
      args(&["a", "b", "c"]),
      MapEnv::new(),
      ScriptedPrompter::detached(),
      &mut out,
    )
    .unwrap_err();

    assert!(matches!(
      err.downcast_ref::<AuthError>(),
      Some(AuthError::InvalidArguments { .. })
    ));
    assert!(out.is_empty());
  }

  #[test]
  fn test_prompted_values_reach_the_sink() {
    let mut out = Vec::new();

    run_auth(
      Mechanism::Plain,
      args(&[]),
      MapEnv::new(),
      ScriptedPrompter::new().answer("alice@example.com").answer("s3cret"),
      &mut out,
    )
    .unwrap();

    assert_eq!(
      String::from_utf8(out).unwrap(),
      "AUTH PLAIN AGFsaWNlQGV4YW1wbGUuY29tAHMzY3JldA==\n"
    );
  }

  #[test]
  fn test_env_overrides_feed_xoauth2() {
    let mut out = Vec::new();
    let env = MapEnv::new()
      .with("MAIL_USER", "bob@example.com")
      .with("MAIL_TOKEN", "ya29.abc");

    run_auth(
      Mechanism::XOAuth2,
      AuthArgs {
        identity_env: Some("MAIL_USER".to_string()),
        secret_env: Some("MAIL_TOKEN".to_string()),
        values: Vec::new(),
      },
      env,
      ScriptedPrompter::detached(),
      &mut out,
    )
    .unwrap();

    assert_eq!(
      String::from_utf8(out).unwrap(),
      "dXNlcj1ib2JAZXhhbXBsZS5jb20BYXV0aD1CZWFyZXIgeWEyOS5hYmMBAQ==\n"
    );
  }
}
