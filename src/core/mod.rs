pub mod add;
pub mod book;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod del;
pub mod edit;
pub mod report;
pub mod timer;

use crate::errors::AppResult;
use crate::storage::ShiftStore;
use book::ShiftBook;

/// Load the collection, apply one intent, and persist the whole collection
/// only if the intent succeeded.
pub fn mutate<S, T, F>(store: &S, intent: F) -> AppResult<T>
where
    S: ShiftStore + ?Sized,
    F: FnOnce(&mut ShiftBook) -> AppResult<T>,
{
    let mut book = ShiftBook::new(store.load());
    let out = intent(&mut book)?;
    store.save(book.shifts())?;
    Ok(out)
}
