use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::format_datetime;
use crate::utils::time::format_hours;
use chrono::Local;

/// Handle `in`, `out` and `note`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg);

    match cmd {
        Commands::In => {
            let shift = ClockLogic::clock_in(&store, Local::now())?;
            success(format!(
                "Clocked in at {} (shift {}).",
                format_datetime(&shift.clock_in),
                shift.short_id()
            ));
        }
        Commands::Out => {
            let shift = ClockLogic::clock_out(&store, Local::now())?;
            let standard = cfg.standard_hours()?;
            let overtime = shift.overtime_hours(standard);
            let mut msg = format!(
                "Clocked out. Shift {} lasted {} h",
                shift.short_id(),
                format_hours(shift.duration_hours())
            );
            if overtime > 0.0 {
                msg.push_str(&format!(" ({} h overtime)", format_hours(overtime)));
            }
            success(msg);
        }
        Commands::Note { text } => {
            let shift = ClockLogic::save_note(&store, text)?;
            success(format!("Note saved on shift {}.", shift.short_id()));
        }
        _ => {}
    }

    Ok(())
}
