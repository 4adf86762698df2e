//! Monthly aggregation: closed shifts grouped by day of clock in, split into
//! regular and overtime hours, and totalled per month.

use crate::models::shift::{Shift, duration};
use crate::models::summary::{DailySummary, MonthlySummary};
use crate::utils::date::{first_of_month, recent_months, same_month};
use chrono::NaiveDate;

/// Summarize the month containing `month`.
///
/// Open shifts are skipped. A shift is attributed wholly to the month and day
/// of its clock in. Daily summaries keep the order in which days are first met.
pub fn summarize_month(shifts: &[Shift], month: NaiveDate, standard_hours: f64) -> MonthlySummary {
    let month = first_of_month(month);
    let mut summary = MonthlySummary::empty(month);

    for shift in shifts
        .iter()
        .filter(|s| !s.is_open() && same_month(s.date(), month))
    {
        summary.total_shifts += 1;

        let date = shift.date();
        let idx = match summary.daily_summaries.iter().position(|d| d.date == date) {
            Some(idx) => idx,
            None => {
                summary.daily_summaries.push(DailySummary::new(date));
                summary.daily_summaries.len() - 1
            }
        };
        summary.daily_summaries[idx].accumulate(duration(shift), standard_hours);
    }

    for day in &summary.daily_summaries {
        summary.total_hours += day.total_hours;
        summary.regular_hours += day.regular_hours;
        summary.overtime_hours += day.overtime_hours;
    }

    summary
}

/// One summary per month, from the month of `today` back `count - 1` months.
pub fn summarize_recent(
    shifts: &[Shift],
    today: NaiveDate,
    count: u32,
    standard_hours: f64,
) -> Vec<MonthlySummary> {
    recent_months(today, count)
        .into_iter()
        .map(|month| summarize_month(shifts, month, standard_hours))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::{STANDARD_SHIFT_HOURS, new_id};
    use chrono::{DateTime, Local, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn shift(clock_in: DateTime<Local>, clock_out: Option<DateTime<Local>>) -> Shift {
        Shift {
            id: new_id(),
            clock_in,
            clock_out,
            notes: String::new(),
        }
    }

    fn march() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_two_shifts_same_day_split_on_cumulative_total() {
        let shifts = vec![
            shift(at(2024, 3, 1, 6, 0), Some(at(2024, 3, 1, 11, 0))),
            shift(at(2024, 3, 1, 13, 0), Some(at(2024, 3, 1, 18, 0))),
        ];

        let summary = summarize_month(&shifts, march(), STANDARD_SHIFT_HOURS);

        assert_eq!(summary.total_shifts, 2);
        assert_eq!(summary.total_hours, 10.0);
        assert_eq!(summary.regular_hours, 8.0);
        assert_eq!(summary.overtime_hours, 2.0);
        assert_eq!(summary.daily_summaries.len(), 1);
        let day = &summary.daily_summaries[0];
        assert_eq!(day.date, march());
        assert_eq!((day.regular_hours, day.overtime_hours), (8.0, 2.0));
    }

    #[test]
    fn test_single_standard_shift() {
        let shifts = vec![shift(at(2024, 3, 1, 9, 0), Some(at(2024, 3, 1, 17, 0)))];
        let summary = summarize_month(&shifts, march(), STANDARD_SHIFT_HOURS);
        assert_eq!(summary.regular_hours, 8.0);
        assert_eq!(summary.overtime_hours, 0.0);
    }

    #[test]
    fn test_open_shift_excluded_from_totals() {
        let shifts = vec![
            shift(at(2024, 3, 2, 9, 0), Some(at(2024, 3, 2, 12, 0))),
            shift(at(2024, 3, 3, 9, 0), None),
        ];
        let summary = summarize_month(&shifts, march(), STANDARD_SHIFT_HOURS);
        assert_eq!(summary.total_shifts, 1);
        assert_eq!(summary.total_hours, 3.0);
        assert_eq!(summary.daily_summaries.len(), 1);
    }

    #[test]
    fn test_empty_month_is_all_zero() {
        let shifts = vec![shift(at(2024, 2, 29, 9, 0), Some(at(2024, 2, 29, 17, 0)))];
        let summary = summarize_month(&shifts, march(), STANDARD_SHIFT_HOURS);
        assert_eq!(summary, MonthlySummary::empty(march()));
        assert!(summary.is_empty());
    }

    #[test]
    fn test_shift_crossing_month_counts_for_clock_in_month() {
        let shifts = vec![shift(at(2024, 3, 31, 22, 0), Some(at(2024, 4, 1, 8, 0)))];

        let march_summary = summarize_month(&shifts, march(), STANDARD_SHIFT_HOURS);
        assert_eq!(march_summary.total_hours, 10.0);
        assert_eq!(march_summary.overtime_hours, 2.0);

        let april = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
        assert!(summarize_month(&shifts, april, STANDARD_SHIFT_HOURS).is_empty());
    }

    #[test]
    fn test_days_keep_encounter_order() {
        let shifts = vec![
            shift(at(2024, 3, 20, 9, 0), Some(at(2024, 3, 20, 10, 0))),
            shift(at(2024, 3, 5, 9, 0), Some(at(2024, 3, 5, 10, 0))),
            shift(at(2024, 3, 20, 11, 0), Some(at(2024, 3, 20, 12, 0))),
        ];
        let summary = summarize_month(&shifts, march(), STANDARD_SHIFT_HOURS);
        let days: Vec<u32> = summary
            .daily_summaries
            .iter()
            .map(|d| chrono::Datelike::day(&d.date))
            .collect();
        assert_eq!(days, vec![20, 5]);
        assert_eq!(summary.total_shifts, 3);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let shifts = vec![
            shift(at(2024, 3, 1, 6, 0), Some(at(2024, 3, 1, 16, 0))),
            shift(at(2024, 3, 8, 9, 0), Some(at(2024, 3, 8, 13, 15))),
        ];
        let first = summarize_month(&shifts, march(), STANDARD_SHIFT_HOURS);
        let second = summarize_month(&shifts, march(), STANDARD_SHIFT_HOURS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_standard_length() {
        let shifts = vec![shift(at(2024, 3, 1, 9, 0), Some(at(2024, 3, 1, 17, 0)))];
        let summary = summarize_month(&shifts, march(), 7.5);
        assert_eq!(summary.regular_hours, 7.5);
        assert_eq!(summary.overtime_hours, 0.5);
    }

    #[test]
    fn test_summarize_recent_months() {
        let shifts = vec![
            shift(at(2024, 3, 1, 9, 0), Some(at(2024, 3, 1, 17, 0))),
            shift(at(2024, 1, 10, 9, 0), Some(at(2024, 1, 10, 12, 0))),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let summaries = summarize_recent(&shifts, today, 3, STANDARD_SHIFT_HOURS);

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].total_hours, 8.0);
        assert!(summaries[1].is_empty());
        assert_eq!(summaries[2].total_hours, 3.0);
    }
}
