//! # Command Layer
//!
//! Business logic for every inventory operation. Commands take the session's
//! [`Inventory`](crate::inventory::Inventory) and a [`DataStore`](crate::store::DataStore)
//! explicitly, return a [`CmdResult`], and never print or read the terminal.
//!
//! Mutating commands write to the store first and only then change the
//! inventory, so a failed write leaves both sides as they were.

use crate::config::StockConfig;
use crate::model::Shoe;

pub mod add;
pub mod config;
pub mod highest;
pub mod load;
pub mod restock;
pub mod search;
pub mod value;
pub mod view;

/// A shoe together with its 1-based position in the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedShoe {
    pub position: usize,
    pub shoe: Shoe,
}

impl ListedShoe {
    pub fn new(index: usize, shoe: &Shoe) -> Self {
        Self {
            position: index + 1,
            shoe: shoe.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct ValueLine {
    pub listed: ListedShoe,
    pub value: f64,
}

#[derive(Debug, Clone, Default)]
pub struct StockValue {
    pub lines: Vec<ValueLine>,
    pub total: f64,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_shoes: Vec<ListedShoe>,
    pub listed_shoes: Vec<ListedShoe>,
    pub load_report: Option<LoadReport>,
    pub stock_value: Option<StockValue>,
    pub config: Option<StockConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_shoes(mut self, shoes: Vec<ListedShoe>) -> Self {
        self.affected_shoes = shoes;
        self
    }

    pub fn with_listed_shoes(mut self, shoes: Vec<ListedShoe>) -> Self {
        self.listed_shoes = shoes;
        self
    }

    pub fn with_load_report(mut self, report: LoadReport) -> Self {
        self.load_report = Some(report);
        self
    }

    pub fn with_stock_value(mut self, value: StockValue) -> Self {
        self.stock_value = Some(value);
        self
    }

    pub fn with_config(mut self, config: StockConfig) -> Self {
        self.config = Some(config);
        self
    }
}
