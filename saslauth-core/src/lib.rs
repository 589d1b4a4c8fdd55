//! # saslauth Core Library
//!
//! Builds the client-side initial response for the SASL PLAIN and XOAUTH2
//! mechanisms. Credentials are resolved from explicit arguments, environment
//! variables, or an interactive terminal prompt, then encoded and written as
//! a single line ready to paste into an SMTP or IMAP `AUTH` exchange.
//!
//! No network I/O happens here, and no OAuth2 tokens are obtained.

pub mod config;
pub mod consts;
pub mod credential;
pub mod env;
pub mod error;
pub mod mechanism;
pub mod output;
pub mod prompts;
pub mod resolver;

pub use config::MechanismConfig;
pub use credential::{Credential, EncodedMessage};
pub use env::{EnvSource, ProcessEnv};
pub use error::AuthError;
pub use mechanism::{Mechanism, encode_plain, encode_xoauth2};
pub use output::{ColorMode, emit, print_error, print_warning};
pub use prompts::{Prompter, TerminalPrompter};
pub use resolver::{ExplicitArgs, Resolver, resolve};
