//! # Credential Resolver
//!
//! Resolves the identity and the secret independently, each from the first
//! source that has a value:
//!
//! 1. an explicit argument,
//! 2. the mechanism's environment variable,
//! 3. an interactive prompt (visible for the identity, masked for the secret).
//!
//! A prompt is never attempted without a terminal, and a closed input stream
//! is an error rather than an empty value.

use tracing::debug;

use crate::config::MechanismConfig;
use crate::credential::Credential;
use crate::env::EnvSource;
use crate::error::AuthError;
use crate::prompts::Prompter;

/// Values supplied positionally on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitArgs {
  pub identity: Option<String>,
  pub secret: Option<String>,
}

impl ExplicitArgs {
  /// Accept zero, one or two positional values (identity, then secret).
  ///
  /// `program` is the name shown in the usage message when more values are
  /// given.
  pub fn from_positionals<I>(program: &str, values: I) -> Result<Self, AuthError>
  where
    I: IntoIterator<Item = String>,
  {
    let mut values = values.into_iter();
    let identity = values.next();
    let secret = values.next();
    if values.next().is_some() {
      return Err(AuthError::invalid_arguments(program));
    }
    Ok(Self { identity, secret })
  }
}

/// Which tier supplied a value. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
  Argument,
  Environment,
  Prompt,
}

#[derive(Debug, Clone, Copy)]
enum Echo {
  Visible,
  Masked,
}

/// Bundles the environment and prompter used for resolution.
pub struct Resolver<E, P> {
  env: E,
  prompter: P,
}

impl<E: EnvSource, P: Prompter> Resolver<E, P> {
  pub const fn new(env: E, prompter: P) -> Self {
    Self { env, prompter }
  }

  /// Resolve a full credential for `config`.
  ///
  /// The identity is resolved, including any prompt, before the secret.
  pub fn resolve(&mut self, args: ExplicitArgs, config: &MechanismConfig) -> Result<Credential, AuthError> {
    let identity = self.resolve_slot(
      args.identity,
      &config.identity_env,
      &config.identity_prompt,
      &config.identity_field(),
      Echo::Visible,
    )?;
    let secret = self.resolve_slot(
      args.secret,
      &config.secret_env,
      &config.secret_prompt,
      &config.secret_field(),
      Echo::Masked,
    )?;
    Ok(Credential::new(identity, secret))
  }

  fn resolve_slot(
    &mut self,
    explicit: Option<String>,
    env_var: &str,
    prompt: &str,
    field: &str,
    echo: Echo,
  ) -> Result<String, AuthError> {
    let (value, source) = if let Some(value) = explicit {
      (value, Source::Argument)
    } else if let Some(value) = self.env.var(env_var) {
      (value, Source::Environment)
    } else {
      (self.prompt(env_var, prompt, field, echo)?, Source::Prompt)
    };

    debug!("Resolved {field} from {source:?}");
    Ok(value)
  }

  fn prompt(&mut self, env_var: &str, prompt: &str, field: &str, echo: Echo) -> Result<String, AuthError> {
    if !self.prompter.is_interactive() {
      return Err(AuthError::TerminalUnavailable {
        field: field.to_string(),
        env_var: env_var.to_string(),
      });
    }

    debug!("{env_var} is not set, prompting for {field}");
    let entered = match echo {
      Echo::Visible => self.prompter.read_line(prompt)?,
      Echo::Masked => self.prompter.read_secret(prompt)?,
    };

    entered.ok_or_else(|| AuthError::EndOfInput {
      field: field.to_string(),
    })
  }
}

/// Resolve a credential using the given environment and prompter.
pub fn resolve<E, P>(args: ExplicitArgs, config: &MechanismConfig, env: E, prompter: P) -> Result<Credential, AuthError>
where
  E: EnvSource,
  P: Prompter,
{
  Resolver::new(env, prompter).resolve(args, config)
}
