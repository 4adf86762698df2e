use crate::core::mutate;
use crate::errors::AppResult;
use crate::models::shift::{Shift, ShiftDraft};
use crate::storage::ShiftStore;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate a back-filled shift and persist it.
    pub fn apply<S: ShiftStore + ?Sized>(store: &S, draft: ShiftDraft) -> AppResult<Shift> {
        mutate(store, |book| book.add_manual(draft).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_reversed_manual_shift_is_not_persisted() {
        let store = MemoryStore::new();
        let draft = ShiftDraft {
            clock_in: Local.with_ymd_and_hms(2024, 3, 1, 17, 0, 0).single(),
            clock_out: Local.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single(),
            notes: String::new(),
        };

        let err = AddLogic::apply(&store, draft).unwrap_err();
        assert_eq!(err.to_string(), "Clock out must be after clock in");
        assert!(store.payload().is_none());
    }

    #[test]
    fn test_manual_shift_is_persisted() {
        let store = MemoryStore::new();
        let draft = ShiftDraft {
            clock_in: Local.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single(),
            clock_out: Local.with_ymd_and_hms(2024, 3, 1, 17, 0, 0).single(),
            notes: "stocktake".into(),
        };

        let shift = AddLogic::apply(&store, draft).unwrap();
        assert_eq!(store.load(), vec![shift]);
    }
}
