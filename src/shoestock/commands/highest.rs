use crate::commands::{CmdMessage, CmdResult, ListedShoe};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;

/// The best-stocked shoe, which goes on sale. Ties go to the first shoe.
pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    let position = inventory.highest_quantity().ok_or(StockError::EmptyStore)?;
    let listed = ListedShoe::new(position, &inventory.shoes()[position]);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} ({}) is now on sale.",
        listed.shoe.product, listed.shoe.code
    )));
    Ok(result.with_listed_shoes(vec![listed]))
}
