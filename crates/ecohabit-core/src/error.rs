//! Core error types for ecohabit-core.
//!
//! Nothing in the tracker is fatal. Challenge no-ops are not errors at all,
//! and remote chat failures ([`InferenceError`]) are swallowed by the chat
//! session and replaced with a fixed reply. The remaining variants cover
//! setup problems a front end should report.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ecohabit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Chat setup or usage errors
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    /// Credential storage errors
    #[error("Secret store error: {0}")]
    Secret(#[from] keyring::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not determine or create the data directory
    #[error("Data directory unavailable: {0}")]
    DataDir(#[source] std::io::Error),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors a caller of the chat session can observe.
///
/// Remote failures are not part of this enum; they end up in the log as the
/// fallback reply.
#[derive(Error, Debug)]
pub enum ChatError {
    /// No API token in the environment or the keyring
    #[error("No inference API token configured (set ECOHABIT_API_TOKEN or run `auth login`)")]
    MissingToken,

    /// Message text was empty or whitespace
    #[error("Message is empty")]
    EmptyMessage,

    /// A previous message is still waiting for its reply
    #[error("A request is already in flight")]
    RequestInFlight,

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Failures of a single inference round trip.
#[derive(Error, Debug)]
pub enum InferenceError {
    /// Endpoint or model id did not form a valid URL
    #[error("Invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {timeout:?}")]
    Timeout { timeout: std::time::Duration },

    /// Connection, TLS or body transfer failure
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx response
    #[error("Server responded with HTTP {status}")]
    Status { status: reqwest::StatusCode },

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response decoded but carried no generated text
    #[error("Received empty response")]
    EmptyCompletion,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
