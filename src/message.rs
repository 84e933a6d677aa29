use crate::api::ApiError;
use crate::model::{Patient, PatientOption, Phase, PredictionResult, RunId};
use iced::widget::image::Handle;

#[derive(Debug, Clone)]
pub enum Message {
    PatientsLoaded(Result<Vec<Patient>, ApiError>),
    SelectPatient(PatientOption),
    RunInference,
    InferenceFinished {
        run: RunId,
        outcome: Result<PredictionResult, ApiError>,
    },
    OverlayLoaded {
        run: RunId,
        phase: Phase,
        outcome: Result<Handle, String>,
    },
    SetPhase(Phase),
}
