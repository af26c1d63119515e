//! Client configuration types.

use fofa_core::{FofaError, Result};

/// Environment variable holding the account email
pub const EMAIL_ENV: &str = "FOFA_EMAIL";

/// Environment variable holding the API key
pub const KEY_ENV: &str = "FOFA_KEY";

/// Account credentials sent with every request.
///
/// Both values are appended to the query string verbatim; callers must make
/// sure they contain nothing that would corrupt a URL.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Account email
    pub email: String,

    /// API key
    pub key: String,
}

impl Credentials {
    /// Create credentials from an email and key
    #[must_use]
    pub fn new(email: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            key: key.into(),
        }
    }

    /// Read credentials from `FOFA_EMAIL` and `FOFA_KEY`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| FofaError::Config(format!("{name} is not set")))
        };

        Ok(Self {
            email: read(EMAIL_ENV)?,
            key: read(KEY_ENV)?,
        })
    }

    /// Returns true if neither value is empty
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.key.is_empty()
    }

    /// The key with everything but its edges hidden, for display
    #[must_use]
    pub fn masked_key(&self) -> String {
        mask(&self.key)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("key", &self.masked_key())
            .finish()
    }
}

/// Mask a secret as `abcd...wxyz`, or `****` when it is too short to show edges
#[must_use]
pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let creds =
            Credentials::from_lookup(lookup_from(&[(EMAIL_ENV, "a@b.c"), (KEY_ENV, "k")])).unwrap();
        assert_eq!(creds, Credentials::new("a@b.c", "k"));
        assert!(creds.is_complete());
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err = Credentials::from_lookup(lookup_from(&[(EMAIL_ENV, "a@b.c"), (KEY_ENV, " ")]))
            .unwrap_err();
        assert!(matches!(err, FofaError::Config(ref m) if m.contains(KEY_ENV)));
    }

    #[test]
    fn test_debug_hides_key() {
        let creds = Credentials::new("a@b.c", "0123456789abcdef");
        let shown = format!("{creds:?}");
        assert!(shown.contains("0123...cdef"));
        assert!(!shown.contains("0123456789abcdef"));
        assert_eq!(mask("short"), "****");
    }
}
