use crate::commands::{CmdMessage, CmdResult};
use crate::config::{StockConfig, KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_path: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StockConfig::load_file(config_path)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(value)),
            None => result.add_message(CmdMessage::error(unknown_key(&key))),
        },
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save_file(config_path)?;
            log::debug!("saved {} to {}", key, config_path.display());

            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            if key == "file" {
                check_inventory_file(&config, config_path, &mut result);
            }
        }
    }

    Ok(result.with_config(config))
}

fn unknown_key(key: &str) -> String {
    format!("Unknown config key: {} (expected one of: {})", key, KEYS.join(", "))
}

/// Points out where a newly configured inventory file resolves to, and
/// warns when nothing is there yet.
fn check_inventory_file(config: &StockConfig, config_path: &Path, result: &mut CmdResult) {
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let inventory = config.inventory_path(base_dir);
    if inventory.is_file() {
        result.add_message(CmdMessage::info(format!(
            "Inventory file: {}",
            inventory.display()
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} does not exist yet; adding a shoe will create it.",
            inventory.display()
        )));
    }
}
