use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::book::ShiftPatch;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_optional_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        start,
        end,
        notes,
    } = cmd
    {
        let patch = ShiftPatch {
            clock_in: parse_optional_datetime(start.as_ref())?,
            clock_out: parse_optional_datetime(end.as_ref())?,
            notes: notes.clone(),
        };

        let store = open_store(cfg);
        let shift = EditLogic::apply(&store, id, patch)?;
        success(format!("✏️ Shift {} updated.", shift.short_id()));
    }

    Ok(())
}
