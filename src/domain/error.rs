// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Environment variable {0} is not set")]
    MissingCredential(&'static str),
    #[error("Standard input is not piped in")]
    StdinNotPiped,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failures of a single Zeppelin round trip.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Could not build HTTP session: {0}")]
    Session(#[source] reqwest::Error),
    #[error("Invalid Zeppelin URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Zeppelin returned an internal server error on {endpoint}")]
    ServerError { endpoint: String },
    #[error("Could not encode request body for {endpoint}: {source}")]
    Encode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn is_server_error(&self) -> bool {
        matches!(self, ClientError::ServerError { .. })
    }
}
