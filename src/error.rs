use crate::api::ApiError;
use thiserror::Error;

const GENERIC_RUN_FAILURE: &str = "Prediction failed.";

/// Why a segmentation run produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("No patient selected.")]
    NoPatientSelected,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl RunError {
    /// Most specific text available: backend detail, then the error itself,
    /// then a generic fallback.
    pub fn user_message(&self) -> String {
        let detail = match self {
            RunError::Api(err) => err.detail(),
            RunError::NoPatientSelected => None,
        };
        most_specific(detail, &self.to_string())
    }
}

fn most_specific(detail: Option<&str>, message: &str) -> String {
    [detail, Some(message)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|text| !text.is_empty())
        .unwrap_or(GENERIC_RUN_FAILURE)
        .to_string()
}
