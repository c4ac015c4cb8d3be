use thiserror::Error;

/// Custom error type for WXA
#[derive(Error, Debug)]
pub enum WxaError {
    /// User input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// The alerts endpoint answered with a non-success status
    #[error("Error: {status} {status_text}")]
    Request { status: u16, status_text: String },

    /// The response body could not be parsed
    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for WXA
pub type Result<T> = std::result::Result<T, WxaError>;

impl WxaError {
    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        WxaError::Validation(msg.into())
    }

    /// Create a request error from a status code and its reason phrase
    pub fn request<S: Into<String>>(status: u16, status_text: S) -> Self {
        WxaError::Request {
            status,
            status_text: status_text.into(),
        }
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        WxaError::Parse(msg.into())
    }

    pub fn invalid_url<S: Into<String>>(msg: S) -> Self {
        WxaError::InvalidUrl(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WxaError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_message() {
        let err = WxaError::request(503, "Service Unavailable");
        assert_eq!(err.to_string(), "Error: 503 Service Unavailable");
    }

    #[test]
    fn test_validation_and_parse_messages_are_verbatim() {
        assert_eq!(
            WxaError::validation("Please enter a state abbreviation.").to_string(),
            "Please enter a state abbreviation."
        );
        assert_eq!(
            WxaError::parse("expected value at line 1 column 1").to_string(),
            "expected value at line 1 column 1"
        );
    }
}
