use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::book::ShiftBook;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::storage::ShiftStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::format_datetime;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = open_store(cfg);

        //
        // Resolve first so the prompt names the real shift
        //
        let book = ShiftBook::new(store.load());
        let full_id = book.resolve(id)?;
        let target = book
            .get(&full_id)
            .ok_or_else(|| AppError::ShiftNotFound(full_id.clone()))?;

        if !*yes {
            let prompt = format!(
                "Delete shift {} started {}? This action is irreversible.",
                target.short_id(),
                format_datetime(&target.clock_in)
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&store, &full_id)?;
        success(format!("Shift {} has been deleted.", removed.short_id()));
    }

    Ok(())
}
