use super::DataStore;
use crate::error::{Result, StockError};
use crate::format::{self, ParsedInventory, HEADER};
use crate::model::Shoe;
use std::path::PathBuf;

/// In-memory backing "file" for testing.
/// `None` plays the part of a file that does not exist.
#[derive(Default)]
pub struct InMemoryStore {
    contents: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, strict: bool) -> Result<ParsedInventory> {
        match &self.contents {
            Some(text) => format::parse_inventory(text, strict),
            None => Err(StockError::FileNotFound(PathBuf::from(self.location()))),
        }
    }

    fn append(&mut self, shoe: &Shoe) -> Result<()> {
        let text = self.contents.get_or_insert_with(String::new);
        if text.is_empty() {
            text.push_str(HEADER);
            text.push('\n');
        } else if !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&format::render_line(shoe));
        Ok(())
    }

    fn rewrite(&mut self, shoes: &[Shoe]) -> Result<()> {
        self.contents = Some(format::render_inventory(shoes));
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Header plus the two-shoe sample used across command tests.
    pub const SAMPLE: &str = "Country,Code,Product,Cost,Quantity\n\
                              SA,A001,Nike Air,60.00,10\n\
                              SA,A002,Puma Flex,45.00,3\n";

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::with_contents(format!("{}\n", HEADER)),
            }
        }

        pub fn sample() -> Self {
            Self {
                store: InMemoryStore::with_contents(SAMPLE),
            }
        }

        pub fn missing() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_shoe(mut self, code: &str, quantity: i64) -> Self {
            let shoe = Shoe::new("SA", code, format!("Shoe {}", code), 50.0, quantity);
            self.store.append(&shoe).unwrap();
            self
        }

        pub fn with_line(mut self, line: &str) -> Self {
            let text = self.store.contents.get_or_insert_with(String::new);
            text.push_str(line);
            text.push('\n');
            self
        }
    }
}
