//! Unified application error type.
//! All modules (models, core, storage, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Timestamp fields a manual shift draft must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftField {
    ClockIn,
    ClockOut,
}

impl fmt::Display for ShiftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftField::ClockIn => write!(f, "Clock in"),
            ShiftField::ClockOut => write!(f, "Clock out"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Malformed shift data: {0}")]
    StorageRead(String),

    #[error("Failed to write shift data to {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Clock out must be after clock in")]
    InvalidTimeOrder,

    #[error("{0} time is required")]
    MissingRequiredField(ShiftField),

    // ---------------------------
    // Shift collection
    // ---------------------------
    #[error("A shift is already open (started {0}); clock out first")]
    ShiftAlreadyOpen(String),

    #[error("No shift is currently open")]
    NoOpenShift,

    #[error("Shift not found: {0}")]
    ShiftNotFound(String),

    #[error("Shift id '{0}' is ambiguous; type more characters")]
    AmbiguousShiftId(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date/time: {0} (expected YYYY-MM-DD HH:MM)")]
    InvalidDate(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid duration: {0} (examples: 8h, 7h30m, 450m)")]
    InvalidDuration(String),

    // ---------------------------
    // Config / session
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication failed: wrong identifier or secret")]
    AuthenticationFailed,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
