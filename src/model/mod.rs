pub mod overlay;
pub mod patient;
pub mod phase;
pub mod prediction;
pub mod state;

pub use overlay::{OverlayImage, Overlays};
pub use patient::{Patient, PatientOption};
pub use phase::Phase;
pub use prediction::{DisplayResult, PredictionResult};
pub use state::{OverlayRequest, RunId, RunTicket, ViewState};
