//! Dashboard state machine.
//!
//! `ViewState` is mutated only through the transitions below. Each transition
//! that needs I/O hands back a small request value; the iced layer turns it
//! into a task and feeds the outcome back in as another transition.

use super::{
    DisplayResult, OverlayImage, Overlays, Patient, PatientOption, Phase, PredictionResult,
};
use crate::api::ApiError;
use crate::config::{PlaceholderPolicy, Settings};
use crate::error::RunError;
use iced::widget::image::Handle;

pub type RunId = u64;

/// A fired inference run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    pub run: RunId,
    pub patient_id: String,
}

/// An overlay image that still has to be downloaded for `run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRequest {
    pub run: RunId,
    pub phase: Phase,
    pub url: String,
}

#[derive(Debug, Default)]
pub struct ViewState {
    api_base: String,
    placeholder: PlaceholderPolicy,
    patients: Vec<Patient>,
    selected: Option<String>,
    phase: Phase,
    loading: bool,
    error: Option<String>,
    result: Option<DisplayResult>,
    overlays: Overlays,
    run: RunId,
}

impl ViewState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            api_base: settings.api_base.clone(),
            placeholder: settings.placeholder.clone(),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&DisplayResult> {
        self.result.as_ref()
    }

    /// Overlay for the phase currently selected.
    pub fn displayed_overlay(&self) -> &OverlayImage {
        self.overlays.get(self.phase)
    }

    /// Applies the outcome of the start-up patient listing.
    pub fn patients_loaded(&mut self, result: Result<Vec<Patient>, ApiError>) {
        match result {
            Ok(patients) => {
                let unusable = patients.iter().filter(|p| p.request_id().is_none()).count();
                if unusable > 0 {
                    log::debug!("Skipping {unusable} patient record(s) without any identifier");
                }
                log::info!("Loaded {} patient(s)", patients.len());
                self.patients = patients;
            }
            Err(err) => {
                log::warn!("Failed to list patients: {err}");
                self.patients.clear();
                self.error = Some(format!(
                    "Could not reach the backend at `{}`. Is the API running? ({err})",
                    self.api_base
                ));
            }
        }

        if self.selected_patient().is_none() {
            self.selected = self.patient_options().into_iter().next().map(|o| o.key);
        }
    }

    /// Picker entries. Falls back to the placeholder patient when the backend
    /// list is empty so a run can still be triggered.
    pub fn patient_options(&self) -> Vec<PatientOption> {
        self.candidates().filter_map(Patient::to_option).collect()
    }

    pub fn selected_option(&self) -> Option<PatientOption> {
        self.selected_patient().and_then(Patient::to_option)
    }

    pub fn select_patient(&mut self, key: impl Into<String>) {
        let key = key.into();
        self.selected = Some(key).filter(|k| !k.is_empty());
    }

    /// Identifier sent to `/predict` for the current selection.
    ///
    /// The matching record's backend id wins; otherwise the raw selection key
    /// is sent as-is.
    pub fn request_patient_id(&self) -> Option<String> {
        let selected = self.selected.as_ref()?;
        self.selected_patient()
            .and_then(|patient| patient.real_patient_id.clone())
            .or_else(|| Some(selected.clone()))
    }

    pub fn can_run(&self) -> bool {
        !self.loading && self.request_patient_id().is_some()
    }

    /// Starts a run. Returns `None` when nothing should be sent.
    pub fn start_run(&mut self) -> Option<RunTicket> {
        if self.loading {
            log::debug!("Ignoring run request while run {} is in flight", self.run);
            return None;
        }

        let Some(patient_id) = self.request_patient_id() else {
            self.error = Some(RunError::NoPatientSelected.user_message());
            return None;
        };

        self.error = None;
        self.result = None;
        self.overlays = Overlays::default();
        self.run += 1;
        self.loading = true;

        log::info!("Starting run {} for patient {patient_id}", self.run);
        Some(RunTicket {
            run: self.run,
            patient_id,
        })
    }

    /// Applies an inference outcome and returns the overlays to download.
    pub fn finish_run(
        &mut self,
        run: RunId,
        outcome: Result<PredictionResult, ApiError>,
    ) -> Vec<OverlayRequest> {
        if run != self.run || !self.loading {
            log::debug!("Dropping stale completion for run {run}");
            return Vec::new();
        }
        self.loading = false;

        match outcome {
            Ok(prediction) => {
                let display = DisplayResult::project(&prediction, &self.api_base);
                self.overlays = Overlays {
                    ed: OverlayImage::from_url(display.ed_image.as_deref()),
                    es: OverlayImage::from_url(display.es_image.as_deref()),
                };
                self.result = Some(display);
                log::info!("Run {run} finished");

                self.overlays
                    .pending()
                    .into_iter()
                    .map(|(phase, url)| OverlayRequest { run, phase, url })
                    .collect()
            }
            Err(err) => {
                let err = RunError::from(err);
                log::warn!("Run {run} failed: {err}");
                self.error = Some(err.user_message());
                Vec::new()
            }
        }
    }

    pub fn overlay_loaded(&mut self, run: RunId, phase: Phase, outcome: Result<Handle, String>) {
        if run != self.run {
            log::debug!("Dropping {} overlay from stale run {run}", phase.short_label());
            return;
        }

        let slot = self.overlays.get_mut(phase);
        let OverlayImage::Pending(url) = &mut *slot else {
            return;
        };
        let url = std::mem::take(url);

        *slot = match outcome {
            Ok(handle) => OverlayImage::Ready { url, handle },
            Err(reason) => {
                log::warn!("{} overlay unavailable ({url}): {reason}", phase.short_label());
                OverlayImage::Failed { url, reason }
            }
        };
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    fn candidates(&self) -> impl Iterator<Item = &Patient> {
        let fallback = if self.patients.is_empty() {
            self.placeholder.patient()
        } else {
            None
        };
        self.patients.iter().chain(fallback)
    }

    fn selected_patient(&self) -> Option<&Patient> {
        let selected = self.selected.as_deref()?;
        self.candidates().find(|patient| patient.matches(selected))
    }
}
