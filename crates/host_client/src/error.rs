use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid endpoint url for {endpoint}: {source}")]
    InvalidUrl {
        endpoint: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} responded with status {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
    #[error("{endpoint} returned an unreadable body: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{endpoint} returned an empty body")]
    EmptyBody { endpoint: &'static str },
}

impl HostError {
    pub fn endpoint(&self) -> &'static str {
        match self {
            HostError::InvalidUrl { endpoint, .. }
            | HostError::Transport { endpoint, .. }
            | HostError::Status { endpoint, .. }
            | HostError::Decode { endpoint, .. }
            | HostError::EmptyBody { endpoint } => endpoint,
        }
    }
}
