use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::book::ShiftBook;
use crate::core::report::{render_list_totals, render_shift_list};
use crate::errors::AppResult;
use crate::storage::ShiftStore;
use crate::ui::messages::{header, info};
use crate::utils::date::{format_month, parse_month};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let standard = cfg.standard_hours()?;
        let store = open_store(cfg);
        let book = ShiftBook::new(store.load());

        let (title, shifts) = match month {
            Some(m) => {
                let month = parse_month(m)?;
                (format!("Shifts in {}", format_month(month)), book.in_month(month))
            }
            None => ("All shifts".to_string(), book.sorted_desc()),
        };

        if shifts.is_empty() {
            info("No shifts recorded.");
            return Ok(());
        }

        header(title);
        if month.is_some() {
            println!("{}", render_list_totals(&shifts, standard));
        }
        print!("{}", render_shift_list(&shifts, standard));
    }
    Ok(())
}
