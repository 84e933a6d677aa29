const MISSING_VALUE: &str = "—";

/// Renders a metric with two decimals, or `None` when the backend omitted it.
pub fn metric_value(value: Option<f64>) -> Option<String> {
    value.filter(|v| v.is_finite()).map(|v| format!("{v:.2}"))
}

/// Full tile text: value plus unit, or a dash without unit.
pub fn format_metric(value: Option<f64>, unit: &str) -> String {
    match metric_value(value) {
        Some(rendered) => format!("{rendered} {unit}"),
        None => MISSING_VALUE.to_string(),
    }
}
