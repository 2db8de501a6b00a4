use proyectalia_shared::ErrorBody;
use thiserror::Error;

// =========================================================
// 核心错误类型
// =========================================================

/// Every failure of a backend call.
///
/// The UI does not tell these apart: it shows the backend `message` when one
/// came back and a per-view fallback otherwise (see [`ApiError::user_message`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("network error: {0}")]
    Transport(String),
    /// Non-2xx response.
    #[error("request failed with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// 2xx response whose body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport(detail.into())
    }

    /// Builds a status error, keeping the backend's `message` field if the
    /// body carries one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        Self::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text shown to the user: the backend message when present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_preferred() {
        let err = ApiError::from_response(409, r#"{"message":"Ya enviaste una solicitud"}"#);
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message("Could not send the request."), "Ya enviaste una solicitud");
    }

    #[test]
    fn fallback_when_body_has_no_message() {
        for body in ["", "<html>502</html>", r#"{"message":"   "}"#, r#"{"error":"x"}"#] {
            let err = ApiError::from_response(502, body);
            assert_eq!(err.backend_message(), None);
            assert_eq!(err.user_message("Could not load"), "Could not load");
        }
        assert_eq!(ApiError::transport("offline").user_message("fallback"), "fallback");
    }

    #[test]
    fn display_mentions_status() {
        let err = ApiError::from_response(401, r#"{"message":"Token inválido"}"#);
        assert_eq!(err.to_string(), "request failed with status 401: Token inválido");
    }
}
