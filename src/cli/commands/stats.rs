use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::monthly::{summarize_month, summarize_recent};
use crate::core::report::render_month;
use crate::errors::AppResult;
use crate::storage::ShiftStore;
use crate::ui::messages::header;
use crate::utils::date::{format_month, parse_month, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { month, months } = cmd {
        let standard = cfg.standard_hours()?;
        let shifts = open_store(cfg).load();

        let summaries = match month {
            Some(m) => vec![summarize_month(&shifts, parse_month(m)?, standard)],
            None => {
                let count = months.unwrap_or(cfg.months_to_show);
                summarize_recent(&shifts, today(), count, standard)
            }
        };

        for (i, summary) in summaries.iter().enumerate() {
            if i > 0 {
                println!();
            }
            header(format_month(summary.month));
            print!("{}", render_month(summary));
        }
    }
    Ok(())
}
