use crate::model::Patient;

pub const API_BASE_VAR: &str = "CARDIOMANCER_API_BASE";
pub const API_BASE_FALLBACK_VAR: &str = "API_BASE";
pub const PLACEHOLDER_VAR: &str = "CARDIOMANCER_PLACEHOLDER_PATIENT";

const DEFAULT_PLACEHOLDER_LABEL: &str = "Patient 1";
const DEFAULT_PLACEHOLDER_ID: &str = "patient101";

/// What to offer in the patient picker when the backend lists nobody.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderPolicy {
    Disabled,
    Patient(Patient),
}

impl Default for PlaceholderPolicy {
    fn default() -> Self {
        PlaceholderPolicy::Patient(Patient::new(
            DEFAULT_PLACEHOLDER_LABEL,
            DEFAULT_PLACEHOLDER_ID,
        ))
    }
}

impl PlaceholderPolicy {
    /// `off`/`none`/empty disables it, `Label=id` sets both fields, and a bare
    /// value is used as both label and id.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("off") || raw.eq_ignore_ascii_case("none")
        {
            return PlaceholderPolicy::Disabled;
        }

        match raw.split_once('=') {
            Some((label, id)) => {
                let patient = Patient {
                    patient_id: Some(label.trim().to_string()).filter(|s| !s.is_empty()),
                    real_patient_id: Some(id.trim().to_string()).filter(|s| !s.is_empty()),
                };
                if patient.request_id().is_some() {
                    PlaceholderPolicy::Patient(patient)
                } else {
                    PlaceholderPolicy::Disabled
                }
            }
            None => PlaceholderPolicy::Patient(Patient::new(raw, raw)),
        }
    }

    pub fn patient(&self) -> Option<&Patient> {
        match self {
            PlaceholderPolicy::Disabled => None,
            PlaceholderPolicy::Patient(patient) => Some(patient),
        }
    }
}

/// Start-up configuration, read once from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the inference service. Empty when unset.
    pub api_base: String,
    pub placeholder: PlaceholderPolicy,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup(API_BASE_VAR)
            .or_else(|| lookup(API_BASE_FALLBACK_VAR))
            .map(|value| value.trim().to_string())
            .unwrap_or_default();

        if api_base.is_empty() {
            log::warn!(
                "{API_BASE_VAR} is not set; relative overlay URLs resolve against an empty base"
            );
        }

        let placeholder = lookup(PLACEHOLDER_VAR)
            .map(|raw| PlaceholderPolicy::parse(&raw))
            .unwrap_or_default();

        Self {
            api_base,
            placeholder,
        }
    }
}
