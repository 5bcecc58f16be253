use crate::commands::{CmdResult, ListedShoe, StockValue, ValueLine};
use crate::inventory::Inventory;

/// Stock value (cost times quantity) per shoe, plus the total.
pub fn run(inventory: &Inventory) -> CmdResult {
    let lines: Vec<ValueLine> = inventory
        .shoes()
        .iter()
        .enumerate()
        .map(|(index, shoe)| ValueLine {
            listed: ListedShoe::new(index, shoe),
            value: shoe.value(),
        })
        .collect();
    let total = lines.iter().map(|line| line.value).sum();

    CmdResult::default().with_stock_value(StockValue { lines, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Shoe;

    #[test]
    fn values_each_line_and_totals() {
        let inventory = Inventory::from_shoes(vec![
            Shoe::new("SA", "A001", "Nike Air", 60.0, 10),
            Shoe::new("SA", "A002", "Puma Flex", 45.0, 3),
        ]);

        let report = run(&inventory).stock_value.unwrap();
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].value, 600.0);
        assert_eq!(report.lines[1].value, 135.0);
        assert_eq!(report.total, 735.0);
    }

    #[test]
    fn empty_inventory_totals_zero() {
        let report = run(&Inventory::new()).stock_value.unwrap();
        assert!(report.lines.is_empty());
        assert_eq!(report.total, 0.0);
    }
}
