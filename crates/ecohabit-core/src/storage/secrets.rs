//! API token storage.
//!
//! The inference token is never compiled in. It comes from the
//! `ECOHABIT_API_TOKEN` environment variable or, failing that, the OS keyring.

use tracing::{debug, info};

use crate::error::{ConfigError, CoreError};

const SERVICE: &str = "ecohabit";

/// Keyring entry holding the inference API token.
const API_TOKEN_KEY: &str = "inference_token";

/// Environment override checked before the keyring.
pub const API_TOKEN_ENV: &str = "ECOHABIT_API_TOKEN";

fn entry() -> Result<keyring::Entry, keyring::Error> {
    keyring::Entry::new(SERVICE, API_TOKEN_KEY)
}

fn read_keyring() -> Result<Option<String>, keyring::Error> {
    match entry()?.get_password() {
        Ok(pw) => Ok(Some(pw)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Trim surrounding whitespace; a blank token is no token.
fn normalize_token(raw: &str) -> Option<&str> {
    let token = raw.trim();
    (!token.is_empty()).then_some(token)
}

/// Save the API token in the OS keyring, trimmed.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for a blank token, or
/// [`CoreError::Secret`] if the keyring rejects the write.
pub fn store_api_token(raw: &str) -> Result<(), CoreError> {
    let token = normalize_token(raw).ok_or_else(|| ConfigError::InvalidValue {
        key: "api_token".into(),
        message: "token must not be empty".into(),
    })?;
    entry()?.set_password(token)?;
    info!("api token stored in keyring");
    Ok(())
}

/// Remove the API token from the OS keyring. Succeeds if none was stored.
pub fn clear_api_token() -> Result<(), CoreError> {
    match entry()?.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Where a resolved token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Environment,
    Keyring,
}

/// Look up the API token: environment first, then keyring.
///
/// Blank values are treated as absent. A keyring that cannot be reached
/// counts as "no token" and is logged.
pub fn resolve_api_token() -> Option<(String, TokenSource)> {
    resolve_with(std::env::var(API_TOKEN_ENV).ok(), read_keyring)
}

fn resolve_with(
    env_value: Option<String>,
    keyring_lookup: impl FnOnce() -> Result<Option<String>, keyring::Error>,
) -> Option<(String, TokenSource)> {
    if let Some(token) = env_value.as_deref().and_then(normalize_token) {
        return Some((token.to_string(), TokenSource::Environment));
    }

    match keyring_lookup() {
        Ok(Some(stored)) => {
            normalize_token(&stored).map(|token| (token.to_string(), TokenSource::Keyring))
        }
        Ok(None) => None,
        Err(e) => {
            debug!(error = %e, "keyring lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_trimmed_and_blank_ones_dropped() {
        assert_eq!(normalize_token("  hf_abc \n"), Some("hf_abc"));
        assert_eq!(normalize_token("hf_abc"), Some("hf_abc"));
        assert_eq!(normalize_token(" \t "), None);
        assert_eq!(normalize_token(""), None);
    }

    #[test]
    fn storing_a_blank_token_is_rejected_before_the_keyring() {
        assert!(matches!(
            store_api_token("   "),
            Err(CoreError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn resolved_tokens_are_trimmed() {
        let resolved = resolve_with(Some(" env-token\n".into()), || Ok(None));
        assert_eq!(resolved, Some(("env-token".to_string(), TokenSource::Environment)));

        let resolved = resolve_with(None, || Ok(Some("ring-token  ".into())));
        assert_eq!(resolved, Some(("ring-token".to_string(), TokenSource::Keyring)));
    }

    #[test]
    fn environment_wins_over_keyring() {
        let resolved = resolve_with(Some("env-token".into()), || Ok(Some("ring-token".into())));
        assert_eq!(resolved, Some(("env-token".to_string(), TokenSource::Environment)));
    }

    #[test]
    fn blank_environment_falls_back_to_keyring() {
        let resolved = resolve_with(Some("  ".into()), || Ok(Some("ring-token".into())));
        assert_eq!(resolved, Some(("ring-token".to_string(), TokenSource::Keyring)));
    }

    #[test]
    fn keyring_failure_means_no_token() {
        let resolved = resolve_with(None, || Err(keyring::Error::NoEntry));
        assert_eq!(resolved, None);
    }

    #[test]
    fn nothing_stored_means_no_token() {
        assert_eq!(resolve_with(None, || Ok(None)), None);
        assert_eq!(resolve_with(None, || Ok(Some(String::new()))), None);
    }
}
