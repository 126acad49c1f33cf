//! Human-readable durations for cooldown messages

/// Renders a remaining cooldown, rounded up to whole seconds.
///
/// `45_000` becomes `"45s"`, `125_000` becomes `"2m 05s"`.
pub fn format_remaining(millis: u64) -> String {
    let secs = millis.div_ceil(1000);
    if secs < 60 {
        format!("{}s", secs)
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}
