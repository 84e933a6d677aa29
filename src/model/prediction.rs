use crate::utils::to_absolute;
use serde::{Deserialize, Deserializer};

/// Raw `/predict` payload.
///
/// Every field is optional so a partial response still renders: a value that
/// is missing or has the wrong JSON type is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PredictionResult {
    #[serde(default, deserialize_with = "lenient_number")]
    pub edv_ml: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub esv_ml: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub ef_percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ed_overlay_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub es_overlay_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub real_patient_id: Option<String>,
}

/// The part of a prediction the dashboard actually shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayResult {
    pub edv: Option<f64>,
    pub esv: Option<f64>,
    pub ef: Option<f64>,
    pub ed_image: Option<String>,
    pub es_image: Option<String>,
    pub patient_label: Option<String>,
}

impl DisplayResult {
    pub fn project(result: &PredictionResult, api_base: &str) -> Self {
        Self {
            edv: result.edv_ml,
            esv: result.esv_ml,
            ef: result.ef_percent,
            ed_image: to_absolute(result.ed_overlay_url.as_deref(), api_base),
            es_image: to_absolute(result.es_overlay_url.as_deref(), api_base),
            patient_label: result
                .patient_id
                .clone()
                .or_else(|| result.real_patient_id.clone()),
        }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_f64))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text),
        _ => None,
    })
}
