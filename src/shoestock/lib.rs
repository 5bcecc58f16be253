//! # Shoestock Architecture
//!
//! Shoestock tracks a shoe store's stock in a flat text file. The library
//! holds all of the behavior; the `shoestock` binary is one client of it.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI (binary only: cli/)                                     │
//! │  - clap parsing, the interactive menu, rendering             │
//! │  - The ONLY place that touches stdin/stdout or exit codes    │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                                │
//! │  - Owns the session: Inventory, DataStore, restock flow      │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                    │
//! │  - load, add, view, search, restock, value, highest, config  │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Storage (store/) over the text format (format.rs)           │
//! │  - FileStore (production), InMemoryStore (testing)           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Load / Mutate / Persist Cycle
//!
//! The inventory is read once into memory, and every change is written back
//! immediately: a new shoe is appended as one line, a quantity change
//! rewrites the whole file from memory. Writes happen before the in-memory
//! change is committed, so a failed write never leaves memory ahead of disk.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade and session owner
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`format`]: Parsing and rendering of the backing file
//! - [`inventory`]: The ordered in-memory collection
//! - [`model`]: The `Shoe` record and typed field parsing
//! - [`config`]: `shoestock.json` configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod inventory;
pub mod model;
pub mod store;
