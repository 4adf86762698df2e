use crate::core::book::ShiftPatch;
use crate::core::mutate;
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::storage::ShiftStore;

pub struct EditLogic;

impl EditLogic {
    /// Apply `patch` to the shift addressed by `id_or_prefix`.
    pub fn apply<S: ShiftStore + ?Sized>(
        store: &S,
        id_or_prefix: &str,
        patch: ShiftPatch,
    ) -> AppResult<Shift> {
        if patch.is_empty() {
            return Err(AppError::Other(
                "nothing to change: pass --in, --out or --notes".into(),
            ));
        }
        mutate(store, |book| {
            let id = book.resolve(id_or_prefix)?;
            book.update(&id, patch).cloned()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add::AddLogic;
    use crate::models::shift::ShiftDraft;
    use crate::storage::MemoryStore;
    use chrono::{DateTime, Local, TimeZone};

    fn at(h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, h, 0, 0).unwrap()
    }

    fn seeded() -> (MemoryStore, Shift) {
        let store = MemoryStore::new();
        let shift = AddLogic::apply(
            &store,
            ShiftDraft {
                clock_in: Some(at(9)),
                clock_out: Some(at(17)),
                notes: String::new(),
            },
        )
        .unwrap();
        (store, shift)
    }

    #[test]
    fn test_edit_by_prefix() {
        let (store, shift) = seeded();
        let patch = ShiftPatch {
            clock_out: Some(at(19)),
            notes: Some("inventory ran late".into()),
            ..Default::default()
        };

        let edited = EditLogic::apply(&store, shift.short_id(), patch).unwrap();
        assert_eq!(edited.duration_hours(), 10.0);
        assert_eq!(store.load()[0].notes, "inventory ran late");
    }

    #[test]
    fn test_invalid_edit_keeps_stored_shift() {
        let (store, shift) = seeded();
        let patch = ShiftPatch {
            clock_out: Some(at(8)),
            ..Default::default()
        };

        assert!(matches!(
            EditLogic::apply(&store, &shift.id, patch),
            Err(AppError::InvalidTimeOrder)
        ));
        assert_eq!(store.load(), vec![shift]);
    }

    #[test]
    fn test_empty_patch_is_rejected() {
        let (store, shift) = seeded();
        assert!(EditLogic::apply(&store, &shift.id, ShiftPatch::default()).is_err());
    }
}
