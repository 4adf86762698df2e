pub mod add;
pub mod clock;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod stats;
pub mod status;

use crate::config::Config;
use crate::storage::JsonFileStore;

/// Store for the data file selected by the configuration.
pub(crate) fn open_store(cfg: &Config) -> JsonFileStore {
    JsonFileStore::new(cfg.data_path())
}
