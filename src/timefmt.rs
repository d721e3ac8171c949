//! Time formatting helpers for labels, logs, and CLI input.

/// Format seconds as MM:SS, or HH:MM:SS once the hour mark is passed.
/// Non-finite or negative input renders as "00:00".
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }

    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Seconds with one decimal and unit suffix, e.g. "2.5s"
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.1}s", seconds)
}

/// Human-readable duration: "2.5s", "45s", "1m 30s"
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0s".to_string();
    }

    if seconds < 60.0 {
        return if seconds < 10.0 {
            format!("{:.1}s", seconds)
        } else {
            format!("{}s", seconds.round() as u64)
        };
    }

    let total = seconds.round() as u64;
    let minutes = total / 60;
    let secs = total % 60;

    if secs == 0 {
        format!("{}m", minutes)
    } else {
        format!("{}m {}s", minutes, secs)
    }
}

/// Parse "SS", "MM:SS" or "HH:MM:SS" into seconds. Plain numbers may carry
/// decimals. Returns None for anything malformed; negative values clamp to 0.
pub fn parse_time(input: &str) -> Option<f64> {
    let trimmed = input.trim();

    if !trimmed.contains(':') {
        return trimmed.parse::<f64>().ok().map(|s| s.max(0.0));
    }

    let parts: Vec<f64> = trimmed
        .split(':')
        .map(|part| part.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        [minutes, seconds] => Some((minutes * 60.0 + seconds).max(0.0)),
        [hours, minutes, seconds] => Some((hours * 3600.0 + minutes * 60.0 + seconds).max(0.0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(65.9), "01:05");
        assert_eq!(format_time(3665.0), "01:01:05");
        assert_eq!(format_time(-1.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(1.5), "1.5s");
        assert_eq!(format_seconds(12.0), "12.0s");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(2.5), "2.5s");
        assert_eq!(format_duration(45.4), "45s");
        assert_eq!(format_duration(90.0), "1m 30s");
        assert_eq!(format_duration(120.0), "2m");
        assert_eq!(format_duration(119.7), "2m");
        assert_eq!(format_duration(-3.0), "0s");
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("90"), Some(90.0));
        assert_eq!(parse_time("2.5"), Some(2.5));
        assert_eq!(parse_time("1:30"), Some(90.0));
        assert_eq!(parse_time(" 01:02:03 "), Some(3723.0));
        assert_eq!(parse_time("-5"), Some(0.0));
        assert_eq!(parse_time("abc"), None);
        assert_eq!(parse_time("1:2:3:4"), None);
        assert_eq!(parse_time("1:xx"), None);
    }
}
