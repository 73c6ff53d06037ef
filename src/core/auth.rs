//! Credential checks for the task API.
//!
//! Two optional schemes, a shared secret and a bearer token, are combined
//! with OR. With neither configured every request is let through. With at
//! least one configured, a request passes only if a configured scheme
//! matches; an unconfigured scheme never counts as a match.

use crate::errors::Error;

/// Credentials presented by a caller, as extracted from request headers
#[derive(Debug, Default, Clone)]
pub struct PresentedCredentials {
    /// Raw `x-api-key` header value
    pub api_key: Option<String>,
    /// Raw `Authorization` header value
    pub authorization: Option<String>,
}

/// Proof that a caller passed authentication.
///
/// Only [`Authenticator::authenticate`] can create one, and every task
/// operation on the service demands it.
#[derive(Debug, Clone)]
pub struct Authorized {
    _sealed: (),
}

#[derive(Debug, Default, Clone)]
pub struct Authenticator {
    api_key: Option<String>,
    bearer_token: Option<String>,
}

impl Authenticator {
    /// Builds an authenticator; empty strings count as "not configured"
    pub fn new(api_key: Option<String>, bearer_token: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            bearer_token: bearer_token.filter(|t| !t.is_empty()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some() || self.bearer_token.is_some()
    }

    fn api_key_matches(&self, presented: &PresentedCredentials) -> bool {
        match (&self.api_key, &presented.api_key) {
            (Some(expected), Some(given)) => expected == given,
            _ => false,
        }
    }

    fn bearer_token_matches(&self, presented: &PresentedCredentials) -> bool {
        let Some(expected) = &self.bearer_token else {
            return false;
        };
        presented
            .authorization
            .as_deref()
            .and_then(|header| header.strip_prefix(crate::constants::BEARER_PREFIX))
            .is_some_and(|token| token == expected)
    }

    /// Grants access if auth is disabled or any configured scheme matches
    pub fn authenticate(&self, presented: &PresentedCredentials) -> Result<Authorized, Error> {
        if !self.is_enabled()
            || self.api_key_matches(presented)
            || self.bearer_token_matches(presented)
        {
            Ok(Authorized { _sealed: () })
        } else {
            Err(Error::Forbidden)
        }
    }
}
