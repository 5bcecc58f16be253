//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam between the in-memory
//! [`Inventory`](crate::inventory::Inventory) and wherever the backing file
//! lives. Commands only ever talk to this trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the production store, a single text file on disk.
//! - [`memory::InMemoryStore`]: keeps the file text in a `String`, so command
//!   tests can assert on exactly what would have been written without
//!   touching the filesystem.
//!
//! ## Write Paths
//!
//! There are exactly two ways to write:
//! - `append`: one new record line at the end, existing lines untouched.
//! - `rewrite`: header plus every record, replacing the whole file.
//!
//! Both terminate every line with `\n`.

use crate::error::Result;
use crate::format::ParsedInventory;
use crate::model::Shoe;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read and parse the backing file. Missing files are `FileNotFound`.
    fn load(&self, strict: bool) -> Result<ParsedInventory>;

    /// Append one record line, creating the file with a header if absent.
    fn append(&mut self, shoe: &Shoe) -> Result<()>;

    /// Replace the backing file with the header and the given records.
    fn rewrite(&mut self, shoes: &[Shoe]) -> Result<()>;

    /// Human-readable location of the backing file.
    fn location(&self) -> String;
}
