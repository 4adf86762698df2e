use crate::core::mutate;
use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::storage::ShiftStore;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply<S: ShiftStore + ?Sized>(store: &S, id_or_prefix: &str) -> AppResult<Shift> {
        mutate(store, |book| {
            let id = book.resolve(id_or_prefix)?;
            book.delete(&id)
        })
    }
}
