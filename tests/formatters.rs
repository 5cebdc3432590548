#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use logitrack::libs::formatter;

    fn at(date: (i32, u32, u32), time: (u32, u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, time.2)
            .unwrap()
    }

    #[test]
    fn test_elapsed_hours_90_minutes() {
        let start = at((2025, 7, 9), (9, 0, 0));
        let end = at((2025, 7, 9), (10, 30, 0));
        assert_eq!(formatter::elapsed_hours(start, end), 1.5);
    }

    #[test]
    fn test_elapsed_hours_millisecond_precision() {
        let start = at((2025, 7, 9), (9, 0, 0));
        let end = start + chrono::Duration::milliseconds(1);
        assert_eq!(formatter::elapsed_hours(start, end), 1.0 / 3_600_000.0);
    }

    #[test]
    fn test_day_abbreviations_use_template_spelling() {
        // 2025-07-09 is a Wednesday, 2025-07-10 a Thursday.
        assert_eq!(formatter::day_abbreviation(NaiveDate::from_ymd_opt(2025, 7, 9).unwrap()), "WED");
        assert_eq!(formatter::day_abbreviation(NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()), "THR");
        assert_eq!(formatter::day_abbreviation(NaiveDate::from_ymd_opt(2025, 7, 13).unwrap()), "SUN");
    }

    #[test]
    fn test_template_date_suffixes() {
        assert_eq!(formatter::format_template_date(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()), "JUL 1ST");
        assert_eq!(formatter::format_template_date(NaiveDate::from_ymd_opt(2025, 7, 2).unwrap()), "JUL 2ND");
        assert_eq!(formatter::format_template_date(NaiveDate::from_ymd_opt(2025, 7, 3).unwrap()), "JUL 3RD");
        assert_eq!(formatter::format_template_date(NaiveDate::from_ymd_opt(2025, 7, 9).unwrap()), "JUL 9TH");
        // The template uses TH for every day past the third.
        assert_eq!(formatter::format_template_date(NaiveDate::from_ymd_opt(2025, 7, 21).unwrap()), "JUL 21TH");
        assert_eq!(formatter::format_template_date(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()), "DEC 25TH");
    }

    #[test]
    fn test_template_time_is_twelve_hour() {
        assert_eq!(formatter::format_template_time(at((2025, 7, 9), (10, 55, 0))), "10:55 AM");
        assert_eq!(formatter::format_template_time(at((2025, 7, 9), (14, 5, 0))), "2:05 PM");
        assert_eq!(formatter::format_template_time(at((2025, 7, 9), (0, 0, 0))), "12:00 AM");
    }

    #[test]
    fn test_clock_and_date_formats() {
        assert_eq!(formatter::format_clock(at((2025, 7, 9), (8, 5, 0))), "08:05");
        assert_eq!(formatter::format_long_date(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()), "July 1, 2025");
        assert_eq!(formatter::format_short_date(NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()), "July 15");
    }
}
