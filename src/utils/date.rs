use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// First day of the month containing `d`.
pub fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// The month containing `today` followed by the `count - 1` months before it.
pub fn recent_months(today: NaiveDate, count: u32) -> Vec<NaiveDate> {
    let current = first_of_month(today);
    (0..count)
        .map_while(|back| current.checked_sub_months(Months::new(back)))
        .collect()
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))
}

/// Parse a host-local `YYYY-MM-DD HH:MM` (seconds optional, `T` accepted).
pub fn parse_local_datetime(s: &str) -> AppResult<DateTime<Local>> {
    let s = s.trim();
    let naive = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))?;

    // Ambiguous wall-clock times (DST fold) resolve to the earlier instant.
    naive
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<Option<DateTime<Local>>> {
    input.map(|s| parse_local_datetime(s)).transpose()
}

pub fn format_datetime(dt: &DateTime<Local>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_month(month: NaiveDate) -> String {
    month.format("%b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_recent_months_crosses_year_boundary() {
        let months = recent_months(ymd(2024, 2, 17), 3);
        assert_eq!(months, vec![ymd(2024, 2, 1), ymd(2024, 1, 1), ymd(2023, 12, 1)]);
    }

    #[test]
    fn test_recent_months_stops_at_calendar_start() {
        assert_eq!(recent_months(NaiveDate::MIN, 5), vec![first_of_month(NaiveDate::MIN)]);
        assert!(recent_months(ymd(2024, 2, 17), 0).is_empty());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-03").unwrap(), ymd(2024, 3, 1));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("march").is_err());
    }

    #[test]
    fn test_parse_local_datetime_formats() {
        let dt = parse_local_datetime("2024-03-01 09:30").unwrap();
        assert_eq!(dt.date_naive(), ymd(2024, 3, 1));
        assert_eq!((dt.hour(), dt.minute()), (9, 30));

        assert!(parse_local_datetime("2024-03-01T09:30:15").is_ok());
        assert!(parse_local_datetime("09:30").is_err());
    }

    #[test]
    fn test_same_month() {
        assert!(same_month(ymd(2024, 3, 1), ymd(2024, 3, 31)));
        assert!(!same_month(ymd(2024, 3, 1), ymd(2023, 3, 1)));
    }
}
