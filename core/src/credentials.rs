//! Where the SSH username comes from.
//!
//! Lookup order: the `SSH_USERNAME` environment variable, then the OS keyring,
//! then the operator. A prompted username is written back to the keyring so
//! the next run is silent.

use tracing::{debug, warn};

use crate::error::CredentialError;

pub const USERNAME_ENV: &str = "SSH_USERNAME";

const USERNAME_ACCOUNT: &str = "username";
const MAX_PROMPTS: usize = 3;

/// Persistent per-user secret storage.
pub trait SecretStore {
    fn get(&self, service: &str, account: &str) -> Result<Option<String>, CredentialError>;
    fn set(&self, service: &str, account: &str, value: &str) -> Result<(), CredentialError>;
}

/// The platform keyring (Keychain, Credential Manager, Secret Service).
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyringStore;

impl SecretStore for KeyringStore {
    fn get(&self, service: &str, account: &str) -> Result<Option<String>, CredentialError> {
        let entry = keyring::Entry::new(service, account)
            .map_err(|e| CredentialError::Store(e.to_string()))?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CredentialError::Store(e.to_string())),
        }
    }

    fn set(&self, service: &str, account: &str, value: &str) -> Result<(), CredentialError> {
        keyring::Entry::new(service, account)
            .and_then(|entry| entry.set_password(value))
            .map_err(|e| CredentialError::Store(e.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsernameSource {
    Environment,
    Keyring,
    Prompt,
}

/// Resolves the username once, before the first scan.
///
/// `env_value` is the content of [`USERNAME_ENV`]. `prompt` is asked until it
/// yields a non-blank name, at most three times. Keyring errors are logged and
/// never fatal.
pub fn resolve_username<S, P>(
    service: &str,
    env_value: Option<String>,
    store: &S,
    mut prompt: P,
) -> Result<(String, UsernameSource), CredentialError>
where
    S: SecretStore + ?Sized,
    P: FnMut() -> std::io::Result<String>,
{
    if let Some(name) = non_blank(env_value) {
        debug!("Using SSH username from {USERNAME_ENV}");
        return Ok((name, UsernameSource::Environment));
    }

    match store.get(service, USERNAME_ACCOUNT) {
        Ok(stored) => {
            if let Some(name) = non_blank(stored) {
                debug!("Using SSH username stored under '{service}'");
                return Ok((name, UsernameSource::Keyring));
            }
        }
        Err(e) => warn!("Could not read the keyring: {e}"),
    }

    for _ in 0..MAX_PROMPTS {
        if let Some(name) = non_blank(Some(prompt()?)) {
            if let Err(e) = store.set(service, USERNAME_ACCOUNT, &name) {
                warn!("Could not save the username to the keyring: {e}");
            }
            return Ok((name, UsernameSource::Prompt));
        }
    }
    Err(CredentialError::Empty)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
