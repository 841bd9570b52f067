/// Format a duration in seconds as a width-adaptive `HH:MM:SS` style timer
///
/// The width grows with the value: `0:00`, `9:59`, `10:00`, `59:59`,
/// `1:00:00`, `9:59:59`, `10:00:00`. Minutes and seconds are always padded
/// to two digits once a wider component is present; hours are padded only
/// from the two-digit form on.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 9 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else if minutes > 9 {
        format!("{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_duration(0), "0:00");
    }

    #[test]
    fn formats_sub_hour_durations() {
        assert_eq!(format_duration(40), "0:40");
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(599), "9:59");
        assert_eq!(format_duration(600), "10:00");
        assert_eq!(format_duration(3599), "59:59");
    }

    #[test]
    fn formats_hour_durations() {
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3661), "1:01:01");
        assert_eq!(format_duration(35999), "9:59:59");
        assert_eq!(format_duration(36000), "10:00:00");
    }
}
