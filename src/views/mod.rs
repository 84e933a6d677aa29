pub mod metric_card;
pub mod overlay_panel;
pub mod run_panel;

pub use metric_card::metric_card;
pub use overlay_panel::overlay_panel;
pub use run_panel::run_panel;
