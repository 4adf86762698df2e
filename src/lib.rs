//! shiftclock library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use auth::Session;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use tracing::debug;
use utils::logging::enable_logging;
use utils::path::absolutize;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    if matches!(cli.command, Commands::Init) {
        return cli::commands::init::handle(cli, cfg);
    }

    if !session.is_authenticated() {
        return Err(AppError::AuthenticationFailed);
    }

    match &cli.command {
        Commands::Init => Ok(()),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::In | Commands::Out | Commands::Note { .. } => {
            cli::commands::clock::handle(&cli.command, cfg)
        }
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply the data file override from the command line
    if let Some(custom) = &cli.data {
        cfg.data_file = absolutize(custom).to_string_lossy().to_string();
    }

    enable_logging(&cfg.log_level);
    debug!(data = %cfg.data_path().display(), "configuration loaded");

    // 4️⃣ credential gate
    let mut session = Session::new(cfg.auth.clone());
    if session.is_gated()
        && let (Some(user), Some(password)) = (&cli.user, &cli.password)
    {
        session.login(user, password);
    }

    // 5️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &session)
}
