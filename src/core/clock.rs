use crate::core::mutate;
use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::storage::ShiftStore;
use chrono::{DateTime, Local};

/// Live clock in / clock out and notes on the running shift.
pub struct ClockLogic;

impl ClockLogic {
    pub fn clock_in<S: ShiftStore + ?Sized>(store: &S, now: DateTime<Local>) -> AppResult<Shift> {
        mutate(store, |book| book.clock_in(now).cloned())
    }

    pub fn clock_out<S: ShiftStore + ?Sized>(store: &S, now: DateTime<Local>) -> AppResult<Shift> {
        mutate(store, |book| book.clock_out(now).cloned())
    }

    pub fn save_note<S: ShiftStore + ?Sized>(store: &S, note: &str) -> AppResult<Shift> {
        mutate(store, |book| book.save_note(note).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::storage::MemoryStore;
    use chrono::Duration;

    #[test]
    fn test_clock_cycle_is_persisted() {
        let store = MemoryStore::new();
        let start = Local::now() - Duration::hours(3);

        let opened = ClockLogic::clock_in(&store, start).unwrap();
        assert!(store.load()[0].is_open());

        ClockLogic::save_note(&store, "opening shift").unwrap();
        let closed = ClockLogic::clock_out(&store, start + Duration::hours(3)).unwrap();

        assert_eq!(closed.id, opened.id);
        let persisted = store.load();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].notes, "opening shift");
        assert_eq!(persisted[0].duration_hours(), 3.0);
    }

    #[test]
    fn test_rejected_clock_in_does_not_touch_store() {
        let store = MemoryStore::new();
        ClockLogic::clock_in(&store, Local::now()).unwrap();
        let before = store.payload();

        let err = ClockLogic::clock_in(&store, Local::now()).unwrap_err();
        assert!(matches!(err, AppError::ShiftAlreadyOpen(_)));
        assert_eq!(store.payload(), before);
    }
}
