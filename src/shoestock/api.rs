//! # API Facade
//!
//! [`StockApi`] is the single entry point for every inventory operation. It
//! owns the session state, meaning the in-memory [`Inventory`], the backing
//! [`DataStore`] and the restock flow, and dispatches to `commands/*.rs`.
//!
//! Like the commands beneath it, the facade does no terminal I/O and returns
//! structured [`CmdResult`]s. Generic over the store:
//! - Production: `StockApi<FileStore>`
//! - Testing: `StockApi<InMemoryStore>`

use crate::commands::{self, restock::RestockFlow};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::NewShoe;
use crate::store::DataStore;
use std::path::PathBuf;

pub struct StockApi<S: DataStore> {
    store: S,
    inventory: Inventory,
    restock: RestockFlow,
    strict: bool,
    config_path: PathBuf,
}

impl<S: DataStore> StockApi<S> {
    pub fn new(store: S, strict: bool, config_path: PathBuf) -> Self {
        Self {
            store,
            inventory: Inventory::new(),
            restock: RestockFlow::new(),
            strict,
            config_path,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        self.restock.reset();
        commands::load::run(&self.store, &mut self.inventory, self.strict)
    }

    pub fn add_shoe(&mut self, input: &NewShoe) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &mut self.inventory, input)
    }

    pub fn view(&self) -> commands::CmdResult {
        commands::view::run(&self.inventory)
    }

    pub fn search(&self, code: &str) -> commands::CmdResult {
        commands::search::run(&self.inventory, code)
    }

    pub fn stock_value(&self) -> commands::CmdResult {
        commands::value::run(&self.inventory)
    }

    pub fn highest(&self) -> Result<commands::CmdResult> {
        commands::highest::run(&self.inventory)
    }

    /// Starts a restock by selecting the lowest-quantity shoe.
    pub fn begin_restock(&mut self) -> Result<commands::CmdResult> {
        self.restock.select(&self.inventory)
    }

    pub fn confirm_restock(&mut self, reply: &str) -> Result<commands::CmdResult> {
        self.restock.answer(reply)
    }

    pub fn restock_state(&self) -> RestockState {
        self.restock.state()
    }

    pub fn finish_restock(&mut self, raw_amount: &str) -> Result<commands::CmdResult> {
        self.restock
            .collect(&mut self.store, &mut self.inventory, raw_amount)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_path, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::restock::RestockState;
pub use commands::{CmdMessage, CmdResult, ListedShoe, LoadReport, MessageLevel, StockValue};
