//! In-memory shift collection and the intents that mutate it.
//!
//! Every operation either succeeds or leaves the collection untouched, so the
//! caller can persist after each successful call without rollback logic.

use crate::errors::{AppError, AppResult};
use crate::models::shift::{Shift, ShiftDraft, is_valid_shift_time};
use crate::utils::date::{format_datetime, same_month};
use chrono::{DateTime, Local, NaiveDate};
use tracing::debug;

/// Field changes requested by an edit. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ShiftPatch {
    pub clock_in: Option<DateTime<Local>>,
    pub clock_out: Option<DateTime<Local>>,
    pub notes: Option<String>,
}

impl ShiftPatch {
    pub fn is_empty(&self) -> bool {
        self.clock_in.is_none() && self.clock_out.is_none() && self.notes.is_none()
    }
}

/// First shift without a clock out. The book never holds more than one.
pub fn find_open_shift(shifts: &[Shift]) -> Option<&Shift> {
    shifts.iter().find(|s| s.is_open())
}

#[derive(Debug, Clone, Default)]
pub struct ShiftBook {
    shifts: Vec<Shift>,
}

impl ShiftBook {
    pub fn new(shifts: Vec<Shift>) -> Self {
        Self { shifts }
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn open_shift(&self) -> Option<&Shift> {
        find_open_shift(&self.shifts)
    }

    pub fn get(&self, id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    /// Resolve a full id or a unique id prefix to the full id.
    pub fn resolve(&self, id_or_prefix: &str) -> AppResult<String> {
        let needle = id_or_prefix.trim();
        if needle.is_empty() {
            return Err(AppError::ShiftNotFound(id_or_prefix.to_string()));
        }
        if let Some(shift) = self.get(needle) {
            return Ok(shift.id.clone());
        }

        let mut matches = self.shifts.iter().filter(|s| s.id.starts_with(needle));
        match (matches.next(), matches.next()) {
            (Some(shift), None) => Ok(shift.id.clone()),
            (Some(_), Some(_)) => Err(AppError::AmbiguousShiftId(needle.to_string())),
            (None, _) => Err(AppError::ShiftNotFound(needle.to_string())),
        }
    }

    /// Start a new shift at `now`. Refused while another shift is open.
    pub fn clock_in(&mut self, now: DateTime<Local>) -> AppResult<&Shift> {
        if let Some(open) = self.open_shift() {
            return Err(AppError::ShiftAlreadyOpen(format_datetime(&open.clock_in)));
        }

        let shift = Shift::open(now);
        debug!(id = %shift.id, "clock in");
        self.shifts.push(shift);
        Ok(&self.shifts[self.shifts.len() - 1])
    }

    /// Close the open shift at `now`.
    pub fn clock_out(&mut self, now: DateTime<Local>) -> AppResult<&Shift> {
        let idx = self.open_index().ok_or(AppError::NoOpenShift)?;
        if !is_valid_shift_time(self.shifts[idx].clock_in, Some(now)) {
            return Err(AppError::InvalidTimeOrder);
        }

        let shift = &mut self.shifts[idx];
        shift.clock_out = Some(now);
        debug!(id = %shift.id, "clock out");
        Ok(shift)
    }

    /// Replace the notes of the open shift.
    pub fn save_note(&mut self, note: &str) -> AppResult<&Shift> {
        let idx = self.open_index().ok_or(AppError::NoOpenShift)?;
        let shift = &mut self.shifts[idx];
        shift.notes = note.to_string();
        Ok(shift)
    }

    /// Back-fill a complete shift.
    pub fn add_manual(&mut self, draft: ShiftDraft) -> AppResult<&Shift> {
        let shift = draft.into_shift()?;
        debug!(id = %shift.id, "manual shift added");
        self.shifts.push(shift);
        Ok(&self.shifts[self.shifts.len() - 1])
    }

    /// Apply `patch` to the shift `id`; the resulting times must stay ordered.
    pub fn update(&mut self, id: &str, patch: ShiftPatch) -> AppResult<&Shift> {
        let idx = self.index_of(id)?;
        let current = &self.shifts[idx];

        let clock_in = patch.clock_in.unwrap_or(current.clock_in);
        let clock_out = patch.clock_out.or(current.clock_out);
        if !is_valid_shift_time(clock_in, clock_out) {
            return Err(AppError::InvalidTimeOrder);
        }

        // clock_out is never cleared here, so an edit cannot open a second shift.
        let shift = &mut self.shifts[idx];
        shift.clock_in = clock_in;
        shift.clock_out = clock_out;
        if let Some(notes) = patch.notes {
            shift.notes = notes;
        }
        debug!(id = %shift.id, "shift updated");
        Ok(shift)
    }

    pub fn delete(&mut self, id: &str) -> AppResult<Shift> {
        let idx = self.index_of(id)?;
        let removed = self.shifts.remove(idx);
        debug!(id = %removed.id, "shift deleted");
        Ok(removed)
    }

    /// Shifts clocked in during the month of `month`, newest first.
    pub fn in_month(&self, month: NaiveDate) -> Vec<&Shift> {
        let mut out: Vec<&Shift> = self
            .shifts
            .iter()
            .filter(|s| same_month(s.date(), month))
            .collect();
        out.sort_by(|a, b| b.clock_in.cmp(&a.clock_in));
        out
    }

    /// All shifts, newest first.
    pub fn sorted_desc(&self) -> Vec<&Shift> {
        let mut out: Vec<&Shift> = self.shifts.iter().collect();
        out.sort_by(|a, b| b.clock_in.cmp(&a.clock_in));
        out
    }

    fn open_index(&self) -> Option<usize> {
        self.shifts.iter().position(|s| s.is_open())
    }

    fn index_of(&self, id: &str) -> AppResult<usize> {
        self.shifts
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::ShiftNotFound(id.to_string()))
    }
}
