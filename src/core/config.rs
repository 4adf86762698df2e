use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration as YAML, secrets masked.
    pub fn render(cfg: &Config) -> AppResult<String> {
        let mut shown = cfg.clone();
        if let Some(auth) = shown.auth.as_mut() {
            auth.secret = "********".into();
        }
        serde_yaml::to_string(&shown).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Report keys missing from the file at `path` and validate what is there.
    /// Returns the missing keys.
    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {}; defaults are in use. Run `shiftclock init`.",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        let missing = Config::missing_fields(&content)?;
        Config::load_from(path)?;

        if missing.is_empty() {
            success(format!("Configuration {} is complete.", path.display()));
        } else {
            for key in &missing {
                info(format!("'{key}' is not set; the default value is used."));
            }
        }
        Ok(missing)
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        let status = Command::new(&ed).arg(path).status();
        match status {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", ed));
                Ok(())
            }
            _ if ed != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    ed, default_editor
                ));
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                Ok(())
            }
            Ok(s) => Err(AppError::Config(format!("editor '{}' exited with {}", ed, s))),
            Err(e) => Err(AppError::Config(format!("cannot start '{}': {}", ed, e))),
        }
    }
}
