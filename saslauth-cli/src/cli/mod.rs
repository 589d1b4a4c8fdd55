//! # Command Line Interface
//!
//! Defines the CLI structure and dispatch for the saslauth tool, with one
//! subcommand per SASL mechanism.

mod auth;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use saslauth_core::{ColorMode, Mechanism};

pub use auth::AuthArgs;

/// Top-level CLI command for the saslauth tool
#[derive(Parser)]
#[command(name = "saslauth")]
#[command(about = "Build SASL PLAIN and XOAUTH2 initial responses")]
#[command(
  long_about = "Builds the Base64 credential string for SASL PLAIN and XOAUTH2 login.\n\n\
        The identity and secret are taken from arguments, then environment variables,\n\
        then an interactive terminal prompt. The result is printed as a single line\n\
        ready to paste into an SMTP or IMAP AUTH exchange."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the saslauth tool
#[derive(Subcommand)]
pub enum Commands {
  /// Print an `AUTH PLAIN` command line (RFC 4616)
  #[command(long_about = "Prints `AUTH PLAIN <base64>` for a username and password.\n\n\
            Missing values are read from SASL_USERNAME and SASL_PASSWORD, then\n\
            prompted for on the terminal. The password prompt does not echo.")]
  Plain(AuthArgs),

  /// Print an XOAUTH2 initial response
  #[command(long_about = "Prints the bare Base64 XOAUTH2 initial response for a user and an\n\
            OAuth2 access token. The token must already be obtained; saslauth does not\n\
            talk to any OAuth2 provider.\n\n\
            Missing values are read from OAUTH_USER and OAUTH_ACCESS, then prompted\n\
            for on the terminal. The access token prompt does not echo.")]
  #[command(name = "xoauth2")]
  XOAuth2(AuthArgs),
}

/// Handle the parsed command line
pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  match cli.command {
    Commands::Plain(args) => auth::handle_auth_command(Mechanism::Plain, args),
    Commands::XOAuth2(args) => auth::handle_auth_command(Mechanism::XOAuth2, args),
  }
}
