pub mod segmented_toggle;

pub use segmented_toggle::phase_toggle;
