use crate::commands::{CmdMessage, CmdResult, ListedShoe};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::NewShoe;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut S,
    inventory: &mut Inventory,
    input: &NewShoe,
) -> Result<CmdResult> {
    let shoe = input.validate()?;

    store.append(&shoe)?;
    inventory.push(shoe.clone());
    log::info!("added {} ({})", shoe.code, shoe.product);

    let listed = ListedShoe::new(inventory.len() - 1, &shoe);
    let mut result = CmdResult::default().with_affected_shoes(vec![listed]);
    result.add_message(CmdMessage::success(format!(
        "Shoe successfully added: {} {}",
        shoe.code, shoe.product
    )));
    Ok(result)
}
