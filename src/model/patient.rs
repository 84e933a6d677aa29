use serde::{Deserialize, Deserializer};
use std::fmt;

/// Patient record as listed by the inference service.
///
/// Both identifiers are optional. `patient_id` is the human label
/// ("Patient 1") and `real_patient_id` the backend identifier ("patient101").
/// Empty strings are treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Patient {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub patient_id: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub real_patient_id: Option<String>,
}

impl Patient {
    pub fn new(label: impl Into<String>, backend_id: impl Into<String>) -> Self {
        Self {
            patient_id: Some(label.into()),
            real_patient_id: Some(backend_id.into()),
        }
    }

    /// Text shown in the patient picker: label first, backend id second.
    pub fn label(&self) -> Option<&str> {
        self.patient_id
            .as_deref()
            .or(self.real_patient_id.as_deref())
    }

    /// Identifier sent to `/predict`: backend id first, label second.
    pub fn request_id(&self) -> Option<&str> {
        self.real_patient_id
            .as_deref()
            .or(self.patient_id.as_deref())
    }

    pub fn matches(&self, key: &str) -> bool {
        self.patient_id.as_deref() == Some(key) || self.real_patient_id.as_deref() == Some(key)
    }

    pub fn to_option(&self) -> Option<PatientOption> {
        Some(PatientOption {
            key: self.request_id()?.to_string(),
            label: self.label()?.to_string(),
        })
    }
}

/// One entry of the patient picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientOption {
    pub key: String,
    pub label: String,
}

impl fmt::Display for PatientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_label(label: &str) -> Patient {
        Patient {
            patient_id: Some(label.to_string()),
            real_patient_id: None,
        }
    }

    fn only_backend_id(id: &str) -> Patient {
        Patient {
            patient_id: None,
            real_patient_id: Some(id.to_string()),
        }
    }

    #[test]
    fn label_prefers_display_id() {
        assert_eq!(Patient::new("Patient 1", "patient101").label(), Some("Patient 1"));
        assert_eq!(only_backend_id("patient101").label(), Some("patient101"));
    }

    #[test]
    fn request_id_prefers_backend_id() {
        assert_eq!(
            Patient::new("Patient 1", "patient101").request_id(),
            Some("patient101")
        );
        assert_eq!(only_label("Patient 7").request_id(), Some("Patient 7"));
        assert_eq!(Patient::default().request_id(), None);
    }

    #[test]
    fn matches_either_identifier() {
        let patient = Patient::new("Patient 1", "patient101");
        assert!(patient.matches("Patient 1"));
        assert!(patient.matches("patient101"));
        assert!(!patient.matches("patient102"));
    }

    #[test]
    fn decodes_loose_backend_records() {
        let raw = r#"[
            {"patient_id": "Patient 1", "real_patient_id": "patient101", "extra": true},
            {"real_patient_id": "patient102"},
            {"patient_id": "", "real_patient_id": null},
            {"patient_id": 7}
        ]"#;
        let patients: Vec<Patient> = serde_json::from_str(raw).unwrap();

        assert_eq!(patients.len(), 4);
        assert_eq!(patients[0], Patient::new("Patient 1", "patient101"));
        assert_eq!(patients[1], only_backend_id("patient102"));
        assert_eq!(patients[2], Patient::default());
        assert_eq!(patients[3], only_label("7"));
    }

    #[test]
    fn records_without_ids_have_no_option() {
        assert!(Patient::default().to_option().is_none());
        assert_eq!(
            only_label("Patient 3").to_option(),
            Some(PatientOption {
                key: "Patient 3".to_string(),
                label: "Patient 3".to_string(),
            })
        );
    }
}
