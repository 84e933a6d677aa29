pub mod formatting;
pub mod url;

pub use formatting::format_metric;
pub use url::{endpoint, to_absolute};
