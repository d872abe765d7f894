//! Shared-secret bearer gate for the protected `/mcp/v1/*` routes.
//!
//! The gate is fail-closed: with no secret configured every protected request
//! is refused with 503 instead of being let through.

use subtle::ConstantTimeEq;
use thiserror::Error;

const BEARER_PREFIX: &[u8] = b"bearer ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Server misconfigured: {var} not set")]
    ServiceMisconfigured { var: String },

    #[error("Missing Bearer token")]
    Unauthenticated,

    #[error("Invalid API key")]
    Forbidden,
}

/// Where the expected secret comes from.
#[derive(Debug, Clone)]
pub enum SecretSource {
    /// Read the named environment variable on every check, so a changed
    /// value takes effect without rebuilding the router.
    Env(String),
    /// A value supplied up front. `None` behaves like an unset variable.
    Fixed(Option<String>),
}

impl SecretSource {
    fn name(&self) -> &str {
        match self {
            SecretSource::Env(var) => var,
            SecretSource::Fixed(_) => "API_KEY",
        }
    }

    /// Current secret, with empty values treated as unset.
    fn current(&self) -> Option<String> {
        let value = match self {
            SecretSource::Env(var) => std::env::var(var).ok(),
            SecretSource::Fixed(value) => value.clone(),
        };
        value.filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct ApiKeyGate {
    source: SecretSource,
}

impl ApiKeyGate {
    pub fn new(source: SecretSource) -> Self {
        Self { source }
    }

    pub fn from_env(var: impl Into<String>) -> Self {
        Self::new(SecretSource::Env(var.into()))
    }

    pub fn fixed(secret: Option<&str>) -> Self {
        Self::new(SecretSource::Fixed(secret.map(str::to_string)))
    }

    /// Admit or reject a request given its raw `Authorization` header value.
    ///
    /// Works on bytes so a token with non-ASCII octets still reaches the
    /// comparison. Order matters: the secret check runs first so an
    /// unconfigured server answers 503 whatever the client sent.
    pub fn check<H>(&self, authorization: Option<&H>) -> Result<(), AuthError>
    where
        H: AsRef<[u8]> + ?Sized,
    {
        let expected = self.source.current().ok_or_else(|| AuthError::ServiceMisconfigured {
            var: self.source.name().to_string(),
        })?;

        let token = extract_bearer_token(authorization.map(AsRef::as_ref)).ok_or(AuthError::Unauthenticated)?;

        if bool::from(token.ct_eq(expected.as_bytes())) {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }
}

/// Strip a case-insensitive `Bearer ` scheme and surrounding whitespace.
///
/// Returns `None` when the header is absent or uses another scheme. An empty
/// token after the prefix is still returned; it simply never matches.
pub fn extract_bearer_token(authorization: Option<&[u8]>) -> Option<&[u8]> {
    let header = authorization?;
    let prefix = header.get(..BEARER_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(BEARER_PREFIX) {
        return None;
    }
    Some(trim_ascii_whitespace(&header[BEARER_PREFIX.len()..]))
}

fn trim_ascii_whitespace(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if !first.is_ascii_whitespace() {
            break;
        }
        bytes = rest;
    }
    while let [rest @ .., last] = bytes {
        if !last.is_ascii_whitespace() {
            break;
        }
        bytes = rest;
    }
    bytes
}
