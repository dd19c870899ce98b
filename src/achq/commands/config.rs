use crate::commands::{CmdMessage, CmdResult};
use crate::config::AchqConfig;
use crate::error::{AchqError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = AchqConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result.add_message(CmdMessage::info(format!("page-size = {}", config.page_size)));
            result.add_message(CmdMessage::info(format!(
                "default-sort = {}",
                config.default_sort
            )));
        }
        ConfigAction::ShowKey(key) => {
            let value = match key.as_str() {
                "page-size" => config.page_size.to_string(),
                "default-sort" => config.default_sort.clone(),
                _ => return Err(AchqError::Api(format!("Unknown config key: {}", key))),
            };
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            let stored = match key.as_str() {
                "page-size" => {
                    config.set_page_size(&value)?;
                    config.page_size.to_string()
                }
                "default-sort" => {
                    config.set_default_sort(&value);
                    config.default_sort.clone()
                }
                _ => return Err(AchqError::Api(format!("Unknown config key: {}", key))),
            };
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
        }
    }

    Ok(result.with_config(config))
}
