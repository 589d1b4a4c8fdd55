//! Core constants shared across saslauth components.

/// Environment variable holding the PLAIN authentication identity.
pub const ENV_SASL_USERNAME: &str = "SASL_USERNAME";

/// Environment variable holding the PLAIN password.
pub const ENV_SASL_PASSWORD: &str = "SASL_PASSWORD";

/// Environment variable holding the XOAUTH2 user (full email address).
pub const ENV_OAUTH_USER: &str = "OAUTH_USER";

/// Environment variable holding the XOAUTH2 access token, without the
/// `Bearer` scheme and without a trailing newline.
pub const ENV_OAUTH_ACCESS: &str = "OAUTH_ACCESS";

/// Scheme label placed in front of the XOAUTH2 access token.
pub const BEARER_SCHEME: &str = "Bearer";

/// Command keyword prefixed to PLAIN output lines.
pub const AUTH_PLAIN_PREFIX: &str = "AUTH PLAIN ";
