//! JSON payload format shared by every store.

use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;

pub fn encode(shifts: &[Shift]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(shifts)?)
}

/// Parse a stored payload. Blank payloads decode to an empty list.
pub fn decode(payload: &str) -> AppResult<Vec<Shift>> {
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(payload).map_err(|e| AppError::StorageRead(e.to_string()))
}
