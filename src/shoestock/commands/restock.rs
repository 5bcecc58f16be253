//! Restocking the lowest-quantity shoe.
//!
//! The flow is a small state machine:
//!
//! ```text
//! Idle -> LowestSelected -> Confirmed -> (quantity collected) -> Persisted
//!                        \-> Declined
//! ```
//!
//! `Declined` and `Persisted` are terminal for one run; [`RestockFlow::reset`]
//! or a new [`RestockFlow::select`] starts over. A quantity that fails to
//! parse sends the flow back to `Idle` with nothing changed.

use crate::commands::{CmdMessage, CmdResult, ListedShoe};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::model::parse_count;
use crate::store::DataStore;

pub const FIELD_ADDITIONAL: &str = "Additional quantity";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestockState {
    #[default]
    Idle,
    LowestSelected {
        position: usize,
    },
    Confirmed {
        position: usize,
    },
    Declined,
    Persisted {
        position: usize,
        quantity: i64,
    },
}

/// `yes` or `y`, ignoring case and surrounding whitespace.
pub fn is_confirmation(reply: &str) -> bool {
    matches!(reply.trim().to_lowercase().as_str(), "yes" | "y")
}

/// The restock candidate: the lowest quantity, first in inventory order.
pub fn lowest(inventory: &Inventory) -> Result<ListedShoe> {
    let position = inventory.lowest_quantity().ok_or(StockError::EmptyStore)?;
    Ok(ListedShoe::new(position, &inventory.shoes()[position]))
}

/// Adds `raw_amount` to the shoe at `position` (0-based) and rewrites the store.
pub fn apply<S: DataStore>(
    store: &mut S,
    inventory: &mut Inventory,
    position: usize,
    raw_amount: &str,
) -> Result<CmdResult> {
    let amount = parse_count(FIELD_ADDITIONAL, raw_amount)?;
    let current = inventory
        .get(position)
        .ok_or_else(|| StockError::InvalidState(format!("no shoe at position {}", position + 1)))?
        .quantity;
    let updated = current
        .checked_add(amount)
        .ok_or_else(|| StockError::InvalidInput {
            field: FIELD_ADDITIONAL,
            value: raw_amount.to_string(),
        })?;

    inventory.set_quantity(position, updated);
    if let Err(e) = store.rewrite(inventory.shoes()) {
        inventory.set_quantity(position, current);
        return Err(e);
    }

    let shoe = &inventory.shoes()[position];
    log::info!("restocked {} from {} to {}", shoe.code, current, updated);

    let mut result = CmdResult::default().with_affected_shoes(vec![ListedShoe::new(position, shoe)]);
    result.add_message(CmdMessage::success(format!(
        "Quantity updated: {} now has {} in stock.",
        shoe.code, updated
    )));
    Ok(result)
}

#[derive(Debug, Default)]
pub struct RestockFlow {
    state: RestockState,
}

impl RestockFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RestockState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = RestockState::Idle;
    }

    /// Picks the candidate. An empty inventory keeps the flow idle.
    pub fn select(&mut self, inventory: &Inventory) -> Result<CmdResult> {
        self.reset();
        let candidate = lowest(inventory)?;
        self.state = RestockState::LowestSelected {
            position: candidate.position - 1,
        };
        let mut result = CmdResult::default().with_listed_shoes(vec![candidate]);
        result.add_message(CmdMessage::info("Lowest stock item:"));
        Ok(result)
    }

    pub fn answer(&mut self, reply: &str) -> Result<CmdResult> {
        let position = match self.state {
            RestockState::LowestSelected { position } => position,
            other => {
                return Err(StockError::InvalidState(format!(
                    "cannot confirm a restock from {:?}",
                    other
                )))
            }
        };

        let mut result = CmdResult::default();
        if is_confirmation(reply) {
            self.state = RestockState::Confirmed { position };
        } else {
            log::debug!("restock declined with reply {:?}", reply);
            self.state = RestockState::Declined;
            result.add_message(CmdMessage::info("Restock cancelled."));
        }
        Ok(result)
    }

    pub fn collect<S: DataStore>(
        &mut self,
        store: &mut S,
        inventory: &mut Inventory,
        raw_amount: &str,
    ) -> Result<CmdResult> {
        let position = match self.state {
            RestockState::Confirmed { position } => position,
            other => {
                return Err(StockError::InvalidState(format!(
                    "cannot add quantity from {:?}",
                    other
                )))
            }
        };

        match apply(store, inventory, position, raw_amount) {
            Ok(result) => {
                self.state = RestockState::Persisted {
                    position,
                    quantity: inventory.shoes()[position].quantity,
                };
                Ok(result)
            }
            Err(e) => {
                self.reset();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::load;
    use crate::store::memory::fixtures::{StoreFixture, SAMPLE};

    fn loaded(fixture: &StoreFixture) -> Inventory {
        let mut inventory = Inventory::new();
        load::run(&fixture.store, &mut inventory, false).unwrap();
        inventory
    }

    #[test]
    fn confirmed_restock_rewrites_in_inventory_order() {
        let mut fixture = StoreFixture::sample();
        let mut inventory = loaded(&fixture);
        let mut flow = RestockFlow::new();

        let selected = flow.select(&inventory).unwrap();
        assert_eq!(selected.listed_shoes[0].shoe.code, "A002");
        assert_eq!(flow.state(), RestockState::LowestSelected { position: 1 });

        flow.answer("yes").unwrap();
        assert_eq!(flow.state(), RestockState::Confirmed { position: 1 });

        let result = flow.collect(&mut fixture.store, &mut inventory, "12").unwrap();
        assert_eq!(result.affected_shoes[0].shoe.quantity, 15);
        assert_eq!(
            flow.state(),
            RestockState::Persisted {
                position: 1,
                quantity: 15
            }
        );
        assert_eq!(
            fixture.store.contents().unwrap(),
            "Country,Code,Product,Cost,Quantity\n\
             SA,A001,Nike Air,60.00,10\n\
             SA,A002,Puma Flex,45.00,15\n"
        );
    }

    #[test]
    fn ties_go_to_the_first_shoe() {
        let fixture = StoreFixture::new()
            .with_shoe("C1", 4)
            .with_shoe("C2", 2)
            .with_shoe("C3", 2);
        let inventory = loaded(&fixture);

        assert_eq!(lowest(&inventory).unwrap().shoe.code, "C2");
    }

    #[test]
    fn declined_restock_changes_nothing() {
        let fixture = StoreFixture::sample();
        let inventory = loaded(&fixture);
        let mut flow = RestockFlow::new();

        flow.select(&inventory).unwrap();
        let result = flow.answer("no").unwrap();

        assert_eq!(flow.state(), RestockState::Declined);
        assert_eq!(result.messages[0].content, "Restock cancelled.");
        assert_eq!(inventory.shoes()[1].quantity, 3);
        assert_eq!(fixture.store.contents().unwrap(), SAMPLE);
    }

    #[test]
    fn bad_quantity_returns_to_idle_without_mutation() {
        let mut fixture = StoreFixture::sample();
        let mut inventory = loaded(&fixture);
        let mut flow = RestockFlow::new();

        flow.select(&inventory).unwrap();
        flow.answer("Y").unwrap();
        let err = flow
            .collect(&mut fixture.store, &mut inventory, "a dozen")
            .unwrap_err();

        assert!(matches!(err, StockError::InvalidInput { .. }));
        assert_eq!(flow.state(), RestockState::Idle);
        assert_eq!(inventory.shoes()[1].quantity, 3);
        assert_eq!(fixture.store.contents().unwrap(), SAMPLE);
    }

    #[test]
    fn overflow_is_invalid_input() {
        let mut fixture = StoreFixture::sample();
        let mut inventory = loaded(&fixture);

        let err = apply(&mut fixture.store, &mut inventory, 1, &i64::MAX.to_string()).unwrap_err();
        assert!(matches!(err, StockError::InvalidInput { .. }));
        assert_eq!(inventory.shoes()[1].quantity, 3);
    }

    #[test]
    fn empty_inventory_is_reported() {
        let fixture = StoreFixture::new();
        let inventory = loaded(&fixture);
        let mut flow = RestockFlow::new();

        let err = flow.select(&inventory).unwrap_err();
        assert!(matches!(err, StockError::EmptyStore));
        assert_eq!(flow.state(), RestockState::Idle);
        assert_eq!(
            fixture.store.contents().unwrap(),
            "Country,Code,Product,Cost,Quantity\n"
        );
    }

    #[test]
    fn quantity_before_confirmation_is_rejected() {
        let mut fixture = StoreFixture::sample();
        let mut inventory = loaded(&fixture);
        let mut flow = RestockFlow::new();

        flow.select(&inventory).unwrap();
        let err = flow
            .collect(&mut fixture.store, &mut inventory, "5")
            .unwrap_err();
        assert!(matches!(err, StockError::InvalidState(_)));
        assert_eq!(inventory.shoes()[1].quantity, 3);
    }

    #[test]
    fn confirmation_words() {
        assert!(is_confirmation("yes"));
        assert!(is_confirmation(" YES "));
        assert!(is_confirmation("y"));
        assert!(!is_confirmation("yep"));
        assert!(!is_confirmation(""));
    }
}
