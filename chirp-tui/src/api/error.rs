use thiserror::Error;

/// Failures produced by [`super::ApiClient`] requests, normalized so
/// every variant exposes the same `{message, status}` shape.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The feed host answered with a non-200 status.
    #[error("Request error: {status} code")]
    Status { status: u16 },

    /// The username filter matched nothing in the collection.
    #[error("No tweets found for user: {username}")]
    NoTweets { username: String, status: u16 },

    /// Transport or body-decode failure from the underlying client.
    #[error("{}", network_message(.0))]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Human-readable message in the normalized rejection shape.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status associated with the failure, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            ApiError::NoTweets { status, .. } => Some(*status),
            ApiError::Network(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

fn network_message(err: &reqwest::Error) -> String {
    let message = err.to_string();
    if message.is_empty() {
        "An error occurred".to_string()
    } else {
        message
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
