use crate::commands::{CmdMessage, CmdResult, ListedShoe};
use crate::inventory::Inventory;

/// Every shoe whose code matches `code`, duplicates included.
pub fn run(inventory: &Inventory, code: &str) -> CmdResult {
    let listed: Vec<_> = inventory
        .find_by_code(code)
        .into_iter()
        .map(|index| ListedShoe::new(index, &inventory.shoes()[index]))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No shoe found with code: {}",
            code.trim()
        )));
    }
    result.with_listed_shoes(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Shoe;

    fn inventory() -> Inventory {
        Inventory::from_shoes(vec![
            Shoe::new("SA", "A001", "Nike Air", 60.0, 10),
            Shoe::new("SA", "A002", "Puma Flex", 45.0, 3),
            Shoe::new("UK", "a001", "Nike Air Mk2", 65.0, 1),
        ])
    }

    #[test]
    fn finds_all_matching_codes_ignoring_case() {
        let result = run(&inventory(), "A001");
        let positions: Vec<_> = result.listed_shoes.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![1, 3]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn reports_a_miss() {
        let result = run(&inventory(), " Z999 ");
        assert!(result.listed_shoes.is_empty());
        assert_eq!(result.messages[0].content, "No shoe found with code: Z999");
    }
}
