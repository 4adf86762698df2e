//! Plain-text views over shifts and summaries, rendered to strings so the
//! command handlers only print.

use crate::core::timer::elapsed_display;
use crate::models::shift::Shift;
use crate::models::summary::MonthlySummary;
use crate::utils::date::format_datetime;
use crate::utils::formatting::{dimmed, note_preview, overtime_cell};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;
use chrono::{DateTime, Local};

const NOTE_WIDTH: usize = 32;

pub fn render_shift_list(shifts: &[&Shift], standard_hours: f64) -> String {
    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("Clock in"),
        Column::left("Clock out"),
        Column::right("Hours"),
        Column::right("Overtime"),
        Column::left("Notes"),
    ]);

    for shift in shifts {
        let (out, hours, overtime) = match shift.clock_out {
            Some(out) => (
                format_datetime(&out),
                format_hours(shift.duration_hours()),
                overtime_cell(shift.overtime_hours(standard_hours)),
            ),
            None => (dimmed("in progress"), dimmed("--"), dimmed("--")),
        };
        table.add_row(vec![
            shift.short_id().to_string(),
            format_datetime(&shift.clock_in),
            out,
            hours,
            overtime,
            note_preview(&shift.notes, NOTE_WIDTH),
        ]);
    }

    table.render()
}

/// One-line totals for a month of shifts: count, hours and summed per-shift overtime.
pub fn render_list_totals(shifts: &[&Shift], standard_hours: f64) -> String {
    let hours: f64 = shifts.iter().map(|s| s.duration_hours()).sum();
    let overtime: f64 = shifts.iter().map(|s| s.overtime_hours(standard_hours)).sum();
    format!(
        "Total shifts: {}   Total hours: {}   Overtime: {}\n",
        shifts.len(),
        format_hours(hours),
        format_hours(overtime)
    )
}

pub fn render_month(summary: &MonthlySummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total shifts:   {}\n", summary.total_shifts));
    out.push_str(&format!("Total hours:    {}\n", format_hours(summary.total_hours)));
    out.push_str(&format!("Regular hours:  {}\n", format_hours(summary.regular_hours)));
    out.push_str(&format!("Overtime hours: {}\n", overtime_cell(summary.overtime_hours)));
    out.push('\n');

    if summary.daily_summaries.is_empty() {
        out.push_str(&format!(
            "No shifts recorded for {}\n",
            summary.month.format("%B %Y")
        ));
        return out;
    }

    out.push_str("Daily breakdown\n");
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::right("Total"),
        Column::right("Regular"),
        Column::right("Overtime"),
    ]);
    for day in &summary.daily_summaries {
        table.add_row(vec![
            day.date.format("%Y-%m-%d %a").to_string(),
            format_hours(day.total_hours),
            format_hours(day.regular_hours),
            overtime_cell(day.overtime_hours),
        ]);
    }
    out.push_str(&table.render());
    out
}

pub fn render_status(open: Option<&Shift>, now: DateTime<Local>) -> String {
    match open {
        Some(shift) => {
            let mut out = format!(
                "Current shift {}\nStarted at: {}\nDuration:   {}\n",
                shift.short_id(),
                format_datetime(&shift.clock_in),
                elapsed_display(Some(shift), now)
            );
            if !shift.notes.is_empty() {
                out.push_str(&format!("Notes:      {}\n", shift.notes));
            }
            out
        }
        None => format!(
            "Not clocked in.\nDuration:   {}\n",
            elapsed_display(None, now)
        ),
    }
}
