//! Typed failures for the outbound answer call.

use thiserror::Error;

/// Errors surfaced by the remote generate-answer call.
///
/// These propagate to the conversation controller, which converts them into
/// a single user-visible error message. No variant is retried automatically.
#[derive(Error, Debug, Clone)]
pub enum InteractionError {
    /// Network-level failure (connect, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status from the API, with the provider's message.
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be interpreted.
    #[error("Malformed Gemini response: {0}")]
    MalformedResponse(String),
}

impl InteractionError {
    /// True when the failure is an authentication/authorization problem
    /// (bad or missing API key).
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_auth_for_unauthorized_statuses() {
        let unauthorized = InteractionError::Api {
            status: 401,
            message: "API key not valid".to_string(),
        };
        let forbidden = InteractionError::Api {
            status: 403,
            message: "PERMISSION_DENIED".to_string(),
        };
        let throttled = InteractionError::Api {
            status: 429,
            message: "RESOURCE_EXHAUSTED".to_string(),
        };
        assert!(unauthorized.is_auth());
        assert!(forbidden.is_auth());
        assert!(!throttled.is_auth());
        assert!(!InteractionError::Transport("offline".to_string()).is_auth());
    }
}
