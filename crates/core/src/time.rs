/// Seconds in the default quiz budget (10 minutes).
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 10 * 60;

/// Below this many seconds the countdown is shown in its warning state.
pub const DEFAULT_LOW_TIME_THRESHOLD_SECS: u32 = 60;

/// Formats seconds as a zero-padded `mm:ss` countdown.
///
/// Minutes are not wrapped into hours, so 6000 seconds renders as `100:00`.
#[must_use]
pub fn format_countdown(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes:02}:{remainder:02}")
}

/// Returns true when the remaining time should be highlighted.
#[must_use]
pub fn is_low_time(remaining_secs: u32, threshold_secs: u32) -> bool {
    remaining_secs < threshold_secs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_is_zero_padded() {
        assert_eq!(format_countdown(125), "02:05");
        assert_eq!(format_countdown(600), "10:00");
        assert_eq!(format_countdown(59), "00:59");
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(6000), "100:00");
    }

    #[test]
    fn low_time_is_strictly_below_threshold() {
        assert!(!is_low_time(60, 60));
        assert!(is_low_time(59, 60));
        assert!(is_low_time(0, 60));
    }
}
