use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Inventory file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid input for {field}: '{value}' is not a valid number")]
    InvalidInput { field: &'static str, value: String },

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Inventory is empty. Load data first.")]
    EmptyStore,

    #[error("Cannot convert {field} value '{value}'")]
    TypeConversion { field: &'static str, value: String },

    #[error("Malformed line {line}: expected 5 fields, found {fields}")]
    MalformedLine { line: usize, fields: usize },

    #[error("Unexpected header: '{0}'")]
    BadHeader(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
