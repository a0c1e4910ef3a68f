use reqwest::StatusCode;
use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failures surfaced by the REST client
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status, with the `message` and `error` fields of the
    /// body when it carried them
    #[error("Server returned {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
        error: Option<String>,
    },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("User not found")]
    UserNotFound,
}

impl ApiError {
    /// Text the server attached to an error response, `message` first
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, error, .. } => {
                message.as_deref().or(error.as_deref())
            }
            _ => None,
        }
    }

    /// Only the `error` field of an error response
    pub fn server_error(&self) -> Option<&str> {
        match self {
            ApiError::Status { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}
