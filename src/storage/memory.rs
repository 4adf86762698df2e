//! In-memory shift store holding the serialized payload in a single slot.

use super::{ShiftStore, codec};
use crate::errors::AppResult;
use crate::models::shift::Shift;
use std::cell::RefCell;
use tracing::warn;

#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a raw payload, as if written by an earlier session.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(payload.into())),
        }
    }

    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ShiftStore for MemoryStore {
    fn load(&self) -> Vec<Shift> {
        let slot = self.slot.borrow();
        let Some(payload) = slot.as_deref() else {
            return Vec::new();
        };
        codec::decode(payload).unwrap_or_else(|e| {
            warn!("ignoring unreadable shift data: {e}");
            Vec::new()
        })
    }

    fn save(&self, shifts: &[Shift]) -> AppResult<()> {
        let payload = codec::encode(shifts)?;
        *self.slot.borrow_mut() = Some(payload);
        Ok(())
    }
}
