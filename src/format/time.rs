use chrono::{DateTime, Local};

/// Time of day for notes written today, otherwise date and minute.
pub(crate) fn format_display_time(value: DateTime<Local>, now: DateTime<Local>) -> String {
    if value.date_naive() == now.date_naive() {
        value.format("%H:%M:%S").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn today_shows_time_only() {
        let now = Local.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap();
        let earlier = Local.with_ymd_and_hms(2024, 5, 1, 9, 4, 7).unwrap();
        assert_eq!(format_display_time(earlier, now), "09:04:07");
    }

    #[test]
    fn other_days_show_date() {
        let now = Local.with_ymd_and_hms(2024, 5, 2, 0, 30, 0).unwrap();
        let earlier = Local.with_ymd_and_hms(2024, 5, 1, 23, 59, 0).unwrap();
        assert_eq!(format_display_time(earlier, now), "2024-05-01 23:59");
    }
}
