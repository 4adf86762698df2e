use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::book::find_open_shift;
use crate::core::report::render_status;
use crate::core::timer::{ShiftTimer, SystemClock};
use crate::errors::AppResult;
use crate::storage::{JsonFileStore, ShiftStore};
use crate::ui::messages::info;
use crate::utils::runtime::single_thread_runtime;
use chrono::Local;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// How often the watch loop re-reads the data file for changes made elsewhere.
const RELOAD_PERIOD: Duration = Duration::from_secs(5);

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { watch } = cmd {
        let store = open_store(cfg);
        let shifts = store.load();
        let open = find_open_shift(&shifts);

        println!("{}", render_status(open, Local::now()));

        if *watch && open.is_some() {
            single_thread_runtime()?.block_on(watch_loop(&store))?;
        }
    }
    Ok(())
}

async fn watch_loop(store: &JsonFileStore) -> AppResult<()> {
    let mut timer = ShiftTimer::new(Arc::new(SystemClock));
    let mut rx = timer.subscribe();
    timer.sync(find_open_shift(&store.load()));

    let mut reload = tokio::time::interval(RELOAD_PERIOD);
    reload.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut out = io::stdout();
    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                debug!("interrupted");
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let text = rx.borrow_and_update().clone();
                write!(out, "\r⏱  {text}")?;
                out.flush()?;
            }
            _ = reload.tick() => {
                let shifts = store.load();
                let open = find_open_shift(&shifts);
                timer.sync(open);
                if open.is_none() {
                    writeln!(out)?;
                    info("Shift closed.");
                    return Ok(());
                }
            }
        }
    }

    timer.cancel();
    writeln!(out)?;
    Ok(())
}
