use std::fmt;

use crate::config::exit;

/// Custom error type for nimbusctl operations
#[derive(Debug)]
pub enum Error {
    /// HTTP request failed (network, TLS, timeout)
    Transport(reqwest::Error),
    /// Response body or pagination link could not be decoded
    Decode(String),
    /// API returned a non-2xx status
    Api {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },
    /// Pre-flight check in a resource client failed
    Validation(String),
    /// Displayer failure (unknown column, encoder error)
    Render(String),
    /// Configuration or credentials problem
    Config(String),
}

impl Error {
    /// Process exit code for this error
    ///
    /// Usage errors are handled by the CLI layer before an `Error` exists,
    /// so everything here maps to the generic runtime failure code.
    pub fn exit_code(&self) -> i32 {
        exit::FAILURE
    }

    /// Build an API error from a decoded error document, falling back to
    /// the raw status line plus a body prefix when the document is absent.
    pub fn api_from_body(status: u16, body: &serde_json::Value) -> Self {
        let code = body["id"].as_str().unwrap_or("").to_string();
        let message = match body["message"].as_str() {
            Some(m) => m.to_string(),
            None => {
                let prefix: String = body.to_string().chars().take(120).collect();
                format!("HTTP {}: {}", status, prefix)
            }
        };
        let request_id = body["request_id"].as_str().map(|s| s.to_string());
        Error::Api {
            status,
            code,
            message,
            request_id,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "HTTP request failed: {}", e),
            Error::Decode(msg) => write!(f, "Decode error: {}", msg),
            Error::Api {
                status,
                code,
                message,
                ..
            } => {
                if code.is_empty() {
                    write!(f, "API error (status {}): {}", status, message)
                } else {
                    write!(f, "API error (status {}, {}): {}", status, code, message)
                }
            }
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::Render(msg) => write!(f, "Render error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Render(err.to_string())
    }
}

/// Result type alias for nimbusctl operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_with_code() {
        let err = Error::Api {
            status: 422,
            code: "unprocessable_entity".to_string(),
            message: "ip is required".to_string(),
            request_id: None,
        };
        let text = err.to_string();
        assert!(text.contains("422"));
        assert!(text.contains("unprocessable_entity"));
        assert!(text.contains("ip is required"));
    }

    #[test]
    fn test_api_error_display_without_code() {
        let err = Error::Api {
            status: 500,
            code: String::new(),
            message: "Internal Server Error".to_string(),
            request_id: None,
        };
        let text = err.to_string();
        assert!(text.contains("status 500"));
        assert!(!text.contains(", )"));
    }

    #[test]
    fn test_api_from_body_decodes_error_document() {
        let body = serde_json::json!({
            "id": "unprocessable_entity",
            "message": "ip is required",
            "request_id": "req-123"
        });
        match Error::api_from_body(422, &body) {
            Error::Api {
                status,
                code,
                message,
                request_id,
            } => {
                assert_eq!(status, 422);
                assert_eq!(code, "unprocessable_entity");
                assert_eq!(message, "ip is required");
                assert_eq!(request_id.as_deref(), Some("req-123"));
            }
            _ => panic!("Expected Error::Api"),
        }
    }

    #[test]
    fn test_api_from_body_falls_back_to_status_line() {
        let body = serde_json::json!("gateway timeout");
        match Error::api_from_body(504, &body) {
            Error::Api {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(status, 504);
                assert!(code.is_empty());
                assert!(message.starts_with("HTTP 504"));
            }
            _ => panic!("Expected Error::Api"),
        }
    }

    #[test]
    fn test_exit_code_is_runtime_failure() {
        let err = Error::Validation("name is required".to_string());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        // Verify Error is Send + Sync for async usage
        assert_send_sync::<Error>();
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Decode(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Error::Decode"),
        }
    }
}
