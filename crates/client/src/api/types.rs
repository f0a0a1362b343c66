//! Credential wrapper for protected routes.

use secrecy::{ExposeSecret, SecretString};

/// Opaque bearer credential issued by the backend at login.
///
/// The client never looks inside the token, validates it, or refreshes it.
/// `Debug` output is redacted.
#[derive(Clone)]
pub struct BearerToken(SecretString);

impl BearerToken {
    /// Wrap a token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

impl From<String> for BearerToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for BearerToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<SecretString> for BearerToken {
    fn from(token: SecretString) -> Self {
        Self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let token = BearerToken::new("eyJhbGciOi.secret");
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret"));
        assert_eq!(token.expose(), "eyJhbGciOi.secret");
    }
}
