use std::fmt::Debug;

use error_stack::{report, ResultExt};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Service account credential is not set")]
    Missing,
    #[error("Service account credential is not a JSON object")]
    Invalid,
}

/// Service account credential as handed over by the environment. Held in
/// memory for one run, never written anywhere.
#[derive(Clone, PartialEq)]
pub struct Credential(Map<String, Value>);

impl Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("client_email", &self.client_email().unwrap_or("<unknown>"))
            .finish_non_exhaustive()
    }
}

impl Credential {
    pub fn from_env(var: &str) -> error_stack::Result<Self, CredentialError> {
        let raw = std::env::var(var).ok();
        Self::parse(raw.as_deref())
            .attach_printable_lazy(|| format!("Environment variable: {var}"))
    }

    pub fn parse(raw: Option<&str>) -> error_stack::Result<Self, CredentialError> {
        let raw = raw
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| report!(CredentialError::Missing))?;

        match serde_json::from_str::<Value>(raw).change_context(CredentialError::Invalid)? {
            Value::Object(map) => Ok(Credential(map)),
            _ => Err(report!(CredentialError::Invalid))
                .attach_printable("Expected a JSON object with the service account key"),
        }
    }

    pub fn client_email(&self) -> Option<&str> {
        self.0.get("client_email").and_then(Value::as_str)
    }

    pub fn as_json(&self) -> &Map<String, Value> {
        &self.0
    }
}
