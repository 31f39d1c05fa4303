//! Utility helpers for Melodeck

/// Placeholder shown in a playlist row until its duration has been probed.
pub const UNKNOWN_DURATION: &str = "--:--";

/// Render a playback position as `m:ss`.
///
/// Non-finite input (an unloaded source reports `NaN`, a live stream `inf`)
/// renders as `0:00`. Minutes are never rolled into hours.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "0:00".to_string();
    }
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_renders_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(f64::NEG_INFINITY), "0:00");
    }

    #[test]
    fn pads_seconds() {
        assert_eq!(format_time(5.0), "0:05");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(600.0), "10:00");
    }

    #[test]
    fn floors_fractional_seconds() {
        assert_eq!(format_time(59.999), "0:59");
        assert_eq!(format_time(0.4), "0:00");
    }

    #[test]
    fn no_hour_component() {
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(7325.0), "122:05");
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(format_time(-3.0), "0:00");
    }
}
