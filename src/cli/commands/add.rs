use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::models::shift::ShiftDraft;
use crate::ui::messages::success;
use crate::utils::date::parse_optional_datetime;
use crate::utils::time::format_hours;

/// Add a complete shift after the fact.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { start, end, notes } = cmd {
        //
        // 1. Parse timestamps (presence is checked by the validator)
        //
        let draft = ShiftDraft {
            clock_in: parse_optional_datetime(start.as_ref())?,
            clock_out: parse_optional_datetime(end.as_ref())?,
            notes: notes.clone(),
        };

        //
        // 2. Validate and persist
        //
        let store = open_store(cfg);
        let shift = AddLogic::apply(&store, draft)?;

        success(format!(
            "Shift {} added ({} h).",
            shift.short_id(),
            format_hours(shift.duration_hours())
        ));
    }

    Ok(())
}
