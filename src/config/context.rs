//! Deployment context: string key/value pairs supplied at render time
//!
//! Values come from the `context:` map of `unistack.yaml` and are overridden by
//! `-c key=value` arguments.

use std::collections::BTreeMap;

use crate::error::{Result, UnistackError, config};

/// Deployment environment tag, e.g. `test` or `prod`
pub const ENV: &str = "env";
/// Base domain name
pub const DOMAIN: &str = "domain";
/// Reference to an existing TLS certificate
pub const CERTIFICATE_ARN: &str = "certificateArn";
/// Prefix of the per-environment subdomain keys (`subdomain-test`, ...)
pub const SUBDOMAIN_PREFIX: &str = "subdomain-";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    values: BTreeMap<String, String>,
}

impl Context {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// Parse a single `key=value` argument
    ///
    /// The value may itself contain `=`; only the first one splits.
    pub fn parse_pair(input: &str) -> Result<(String, String)> {
        let (key, value) = input
            .split_once('=')
            .ok_or_else(|| UnistackError::ContextInvalidPair {
                input: input.to_string(),
            })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(UnistackError::ContextInvalidPair {
                input: input.to_string(),
            });
        }
        Ok((key.to_string(), value.to_string()))
    }

    /// Apply `key=value` overrides on top of the current values
    pub fn with_overrides<S: AsRef<str>>(mut self, pairs: &[S]) -> Result<Self> {
        for pair in pairs {
            let (key, value) = Self::parse_pair(pair.as_ref())?;
            self.values.insert(key, value);
        }
        Ok(self)
    }

    pub fn try_get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn require(&self, key: &str) -> Result<&str> {
        self.try_get(key).ok_or_else(|| config::context_missing(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.values.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
