use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::JsonFileStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty shift data file, unless one already exists
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let custom = cli.data.as_ref().map(|_| cfg.data_file.clone());
    let cfg = Config::init_all(custom, cli.test)?;

    info("Initializing shiftclock…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }

    let store = JsonFileStore::new(cfg.data_path());
    store.ensure_exists()?;
    info(format!("Data file   : {}", store.path().display()));

    success("shiftclock initialization completed!");
    Ok(())
}
