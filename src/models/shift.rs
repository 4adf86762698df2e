//! Shift entity and the pure rules around it: duration, overtime and
//! time-order validity.

use crate::errors::{AppError, AppResult, ShiftField};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of a standard shift, in hours, when none is configured.
pub const STANDARD_SHIFT_HOURS: f64 = 8.0;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// A single work shift. An absent `clock_out` means the shift is still open.
///
/// Serialized with camelCase keys (`id`, `clockIn`, `clockOut`, `notes`);
/// timestamps are RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub clock_in: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<DateTime<Local>>,
    #[serde(default)]
    pub notes: String,
}

impl Shift {
    /// Open a new shift starting at `clock_in`.
    pub fn open(clock_in: DateTime<Local>) -> Self {
        Self {
            id: new_id(),
            clock_in,
            clock_out: None,
            notes: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Host-local calendar day the shift is attributed to.
    pub fn date(&self) -> NaiveDate {
        self.clock_in.date_naive()
    }

    pub fn duration_hours(&self) -> f64 {
        duration(self)
    }

    pub fn overtime_hours(&self, standard_hours: f64) -> f64 {
        overtime(self, standard_hours)
    }

    /// First eight characters of the id, enough to address a shift on the
    /// command line.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

/// Fresh opaque identifier for a shift.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Elapsed hours between clock in and clock out, `0.0` while the shift is open.
pub fn duration(shift: &Shift) -> f64 {
    match shift.clock_out {
        Some(out) => (out - shift.clock_in).num_milliseconds() as f64 / MILLIS_PER_HOUR,
        None => 0.0,
    }
}

/// Hours beyond `standard_hours` for a single shift.
pub fn overtime(shift: &Shift, standard_hours: f64) -> f64 {
    (duration(shift) - standard_hours).max(0.0)
}

/// An open shift is always valid; a closed one needs `clock_out > clock_in`.
pub fn is_valid_shift_time(
    clock_in: DateTime<Local>,
    clock_out: Option<DateTime<Local>>,
) -> bool {
    match clock_out {
        Some(out) => out > clock_in,
        None => true,
    }
}

/// A manually entered shift before it is accepted into the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftDraft {
    pub clock_in: Option<DateTime<Local>>,
    pub clock_out: Option<DateTime<Local>>,
    pub notes: String,
}

/// Check a manual draft. Both timestamps are required and must be ordered.
pub fn validate(draft: &ShiftDraft) -> AppResult<()> {
    let clock_in = draft
        .clock_in
        .ok_or(AppError::MissingRequiredField(ShiftField::ClockIn))?;
    let clock_out = draft
        .clock_out
        .ok_or(AppError::MissingRequiredField(ShiftField::ClockOut))?;

    if !is_valid_shift_time(clock_in, Some(clock_out)) {
        return Err(AppError::InvalidTimeOrder);
    }
    Ok(())
}

impl ShiftDraft {
    /// Validate and turn the draft into a complete shift with a new id.
    pub fn into_shift(self) -> AppResult<Shift> {
        validate(&self)?;
        Ok(Shift {
            id: new_id(),
            clock_in: self.clock_in.ok_or(AppError::MissingRequiredField(ShiftField::ClockIn))?,
            clock_out: self.clock_out,
            notes: self.notes,
        })
    }
}
