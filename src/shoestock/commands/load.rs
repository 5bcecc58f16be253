use crate::commands::{CmdMessage, CmdResult, LoadReport};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::store::DataStore;

/// Replaces the inventory with the contents of the backing file.
///
/// A missing file is not an error here: the inventory is emptied and the
/// result carries an error-level message. Parse failures (strict-mode
/// malformed lines, unconvertible numbers in either mode) propagate and leave
/// the inventory as it was.
pub fn run<S: DataStore>(store: &S, inventory: &mut Inventory, strict: bool) -> Result<CmdResult> {
    let parsed = match store.load(strict) {
        Ok(parsed) => parsed,
        Err(StockError::FileNotFound(path)) => {
            log::info!("inventory file {} does not exist", path.display());
            inventory.replace(Vec::new());
            let mut result = CmdResult::default().with_load_report(LoadReport::default());
            result.add_message(CmdMessage::error(format!(
                "Error: '{}' not found.",
                path.display()
            )));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    let report = LoadReport {
        loaded: parsed.shoes.len(),
        skipped: parsed.skipped,
    };
    if report.skipped > 0 {
        log::info!(
            "skipped {} malformed line(s) in {}",
            report.skipped,
            store.location()
        );
    }
    log::info!("loaded {} shoe(s) from {}", report.loaded, store.location());

    inventory.replace(parsed.shoes);

    let mut result = CmdResult::default().with_load_report(report);
    result.add_message(CmdMessage::success(format!(
        "Inventory loaded: {} shoe(s).",
        report.loaded
    )));
    Ok(result)
}
