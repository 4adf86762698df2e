//! Whole-collection persistence for shifts.
//!
//! A store reads and writes the complete shift list at once; there are no
//! partial writes. Reading never fails: missing or malformed data degrades to
//! an empty collection. The file store moves unreadable data aside before
//! its first write over it.

pub mod codec;
pub mod json_file;
pub mod memory;

use crate::errors::AppResult;
use crate::models::shift::Shift;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub trait ShiftStore {
    /// All persisted shifts, or an empty list when nothing usable is stored.
    fn load(&self) -> Vec<Shift>;

    /// Replace the persisted collection with `shifts`.
    fn save(&self, shifts: &[Shift]) -> AppResult<()>;
}
