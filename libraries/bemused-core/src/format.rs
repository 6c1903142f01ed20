//! Display formatting helpers

/// Format a duration in seconds as `m:ss`
///
/// Sub-minute durations keep a leading `0` minute (`"0:59"`), seconds
/// are always zero-padded. Non-finite or negative input renders as
/// `"0:00"` rather than propagating garbage into the UI.
pub fn format_duration(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "0:00".to_string();
    }

    let total = secs as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
