use thiserror::Error;

/// Failure talking to the inference service.
///
/// Variants carry rendered strings rather than `reqwest::Error` so the error
/// can travel inside cloneable UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("`{0}` is not a valid absolute URL; check CARDIOMANCER_API_BASE")]
    InvalidUrl(String),

    #[error("Inference service is unreachable: {0}")]
    Connectivity(String),

    #[error("{}", server_message(.status, .detail))]
    Server { status: u16, detail: Option<String> },

    #[error("Unexpected response from inference service: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidUrl(
                err.url()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| err.to_string()),
            )
        } else {
            ApiError::Connectivity(err.to_string())
        }
    }
}

fn server_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!("Inference service returned HTTP {status}: {detail}"),
        None => format!("Inference service returned HTTP {status}"),
    }
}

/// Pulls the `detail` field out of an error body.
///
/// A string detail is returned verbatim; structured details (validation
/// error lists) are rendered as compact JSON.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) if text.is_empty() => None,
        serde_json::Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_used_verbatim() {
        assert_eq!(
            extract_detail(r#"{"detail": "Unknown patient_id: patient999"}"#).as_deref(),
            Some("Unknown patient_id: patient999")
        );
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let body = r#"{"detail": [{"loc": ["query", "patient_id"], "msg": "field required"}]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some(r#"[{"loc":["query","patient_id"],"msg":"field required"}]"#)
        );
    }

    #[test]
    fn bodies_without_detail_yield_nothing() {
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"error": "boom"}"#), None);
        assert_eq!(extract_detail(r#"{"detail": null}"#), None);
    }

    #[test]
    fn server_error_message_includes_status() {
        let err = ApiError::Server {
            status: 404,
            detail: Some("Unknown patient_id: x".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Inference service returned HTTP 404: Unknown patient_id: x"
        );
        assert_eq!(err.detail(), Some("Unknown patient_id: x"));

        let bare = ApiError::Server {
            status: 502,
            detail: None,
        };
        assert_eq!(bare.to_string(), "Inference service returned HTTP 502");
    }
}
