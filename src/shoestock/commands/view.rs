use crate::commands::{CmdMessage, CmdResult, ListedShoe};
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory) -> CmdResult {
    let listed: Vec<_> = inventory
        .shoes()
        .iter()
        .enumerate()
        .map(|(index, shoe)| ListedShoe::new(index, shoe))
        .collect();

    let mut result = CmdResult::default().with_listed_shoes(listed);
    if inventory.is_empty() {
        result.add_message(CmdMessage::info("No shoes in inventory."));
    }
    result
}
