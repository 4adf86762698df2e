use chrono::NaiveDate;
use serde::Serialize;

/// Hours worked on one calendar day, split at the standard shift length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
}

impl DailySummary {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            total_hours: 0.0,
            regular_hours: 0.0,
            overtime_hours: 0.0,
        }
    }

    /// Add `hours` to the day and re-split the cumulative total.
    pub fn accumulate(&mut self, hours: f64, standard_hours: f64) {
        self.total_hours += hours;
        if self.total_hours <= standard_hours {
            self.regular_hours = self.total_hours;
            self.overtime_hours = 0.0;
        } else {
            self.regular_hours = standard_hours;
            self.overtime_hours = self.total_hours - standard_hours;
        }
    }
}

/// Totals for one calendar month. `month` is the first day of that month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: NaiveDate,
    pub total_shifts: usize,
    pub total_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub daily_summaries: Vec<DailySummary>,
}

impl MonthlySummary {
    pub fn empty(month: NaiveDate) -> Self {
        Self {
            month,
            total_shifts: 0,
            total_hours: 0.0,
            regular_hours: 0.0,
            overtime_hours: 0.0,
            daily_summaries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_shifts == 0
    }
}
