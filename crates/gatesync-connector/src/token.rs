//! Import token
//!
//! The only input to an import is an opaque token of the form
//! `{name}_{env}`. Virtual host names may themselves contain underscores;
//! environment names may not, so the split happens at the LAST underscore.

use std::fmt;
use std::str::FromStr;

use crate::error::ReconcileError;

/// Parsed identity of a virtual host to import.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportToken {
    name: String,
    env: String,
}

impl ImportToken {
    /// Build a token from an already-known identity.
    pub fn new(name: impl Into<String>, env: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            env: env.into(),
        }
    }

    /// Parse a `{name}_{env}` token, splitting at the last underscore.
    pub fn parse(token: &str) -> Result<Self, ReconcileError> {
        let malformed = || ReconcileError::ImportToken {
            token: token.to_string(),
        };

        let (name, env) = token.rsplit_once('_').ok_or_else(malformed)?;
        if name.is_empty() || env.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            name: name.to_string(),
            env: env.to_string(),
        })
    }

    /// The virtual host name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The environment namespace.
    pub fn env(&self) -> &str {
        &self.env
    }
}

impl fmt::Display for ImportToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.name, self.env)
    }
}

impl FromStr for ImportToken {
    type Err = ReconcileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_token() {
        let token = ImportToken::parse("myhost_test").unwrap();
        assert_eq!(token.name(), "myhost");
        assert_eq!(token.env(), "test");
    }

    #[test]
    fn test_name_with_underscores_splits_at_last() {
        let token = ImportToken::parse("my_host_test").unwrap();
        assert_eq!(token.name(), "my_host");
        assert_eq!(token.env(), "test");
    }

    #[test]
    fn test_token_without_underscore_is_rejected() {
        let err = ImportToken::parse("no-env-marker").unwrap_err();
        assert!(matches!(err, ReconcileError::ImportToken { .. }));
    }

    #[test]
    fn test_empty_sides_are_rejected() {
        assert!(ImportToken::parse("_test").is_err());
        assert!(ImportToken::parse("myhost_").is_err());
        assert!(ImportToken::parse("_").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let token = ImportToken::new("my_host", "prod");
        assert_eq!(token.to_string(), "my_host_prod");
        assert_eq!(token.to_string().parse::<ImportToken>().unwrap(), token);
    }
}
