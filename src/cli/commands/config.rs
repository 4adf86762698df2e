use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if !*print_config && !*check && !*edit_config {
            info(format!("Config file: {}", path.display()));
            info("Use --print, --check or --edit.");
            return Ok(());
        }

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", ConfigLogic::render(cfg)?);
        }

        if *check {
            ConfigLogic::check(&path)?;
        }

        if *edit_config {
            if !path.exists() {
                cfg.save_to(&path)?;
            }
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
