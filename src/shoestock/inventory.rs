use crate::model::Shoe;

/// The in-memory working set for a session.
///
/// Order is insertion order and is significant: it drives both display
/// order and the order of a full rewrite. Lookups are linear scans and codes
/// are not required to be unique.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    shoes: Vec<Shoe>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shoes(shoes: Vec<Shoe>) -> Self {
        Self { shoes }
    }

    pub fn shoes(&self) -> &[Shoe] {
        &self.shoes
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Shoe> {
        self.shoes.get(position)
    }

    pub fn push(&mut self, shoe: Shoe) {
        self.shoes.push(shoe);
    }

    /// Replaces the whole working set, as a reload does.
    pub fn replace(&mut self, shoes: Vec<Shoe>) {
        self.shoes = shoes;
    }

    pub fn set_quantity(&mut self, position: usize, quantity: i64) -> Option<i64> {
        let shoe = self.shoes.get_mut(position)?;
        let previous = shoe.quantity;
        shoe.quantity = quantity;
        Some(previous)
    }

    /// Position of the lowest quantity; the earliest shoe wins a tie.
    pub fn lowest_quantity(&self) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (position, shoe) in self.shoes.iter().enumerate() {
            match best {
                Some((_, quantity)) if shoe.quantity >= quantity => {}
                _ => best = Some((position, shoe.quantity)),
            }
        }
        best.map(|(position, _)| position)
    }

    /// Position of the highest quantity; the earliest shoe wins a tie.
    pub fn highest_quantity(&self) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (position, shoe) in self.shoes.iter().enumerate() {
            match best {
                Some((_, quantity)) if shoe.quantity <= quantity => {}
                _ => best = Some((position, shoe.quantity)),
            }
        }
        best.map(|(position, _)| position)
    }

    /// Positions of every shoe whose code matches, ignoring case.
    pub fn find_by_code(&self, code: &str) -> Vec<usize> {
        let needle = code.trim().to_lowercase();
        self.shoes
            .iter()
            .enumerate()
            .filter(|(_, shoe)| shoe.code.to_lowercase() == needle)
            .map(|(position, _)| position)
            .collect()
    }
}
