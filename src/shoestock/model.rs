use crate::error::{Result, StockError};
use std::fmt;

pub const FIELD_COUNTRY: &str = "Country";
pub const FIELD_CODE: &str = "Code";
pub const FIELD_PRODUCT: &str = "Product";
pub const FIELD_COST: &str = "Cost";
pub const FIELD_QUANTITY: &str = "Quantity";

/// One inventory line item.
#[derive(Debug, Clone, PartialEq)]
pub struct Shoe {
    pub country: String,
    pub code: String,
    pub product: String,
    pub cost: f64,
    pub quantity: i64,
}

impl Shoe {
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: f64,
        quantity: i64,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// Builds a shoe from raw text fields, coercing cost and quantity.
    ///
    /// Meant for callers that already trust their input (the file loader).
    /// User input goes through [`parse_cost`] and [`parse_quantity`] instead,
    /// which report `InvalidInput` rather than `TypeConversion`.
    pub fn from_fields(
        country: &str,
        code: &str,
        product: &str,
        cost: &str,
        quantity: &str,
    ) -> Result<Self> {
        let cost = parse_cost(cost).map_err(|_| StockError::TypeConversion {
            field: FIELD_COST,
            value: cost.to_string(),
        })?;
        let quantity = parse_quantity(quantity).map_err(|_| StockError::TypeConversion {
            field: FIELD_QUANTITY,
            value: quantity.to_string(),
        })?;
        Ok(Self::new(country, code, product, cost, quantity))
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Stock value of this line item.
    pub fn value(&self) -> f64 {
        self.cost * self.quantity as f64
    }

    /// The backing-file line for this shoe, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.country,
            self.code,
            self.product,
            format_cost(self.cost),
            self.quantity
        )
    }
}

/// Cost as written to the backing file.
///
/// Two decimals unless that would change the value, in which case the
/// shortest text that parses back to the same `f64` is used.
pub fn format_cost(cost: f64) -> String {
    let fixed = format!("{:.2}", cost);
    match fixed.parse::<f64>() {
        Ok(parsed) if parsed == cost => fixed,
        _ => cost.to_string(),
    }
}

impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product:        {}", self.product)?;
        writeln!(f, "Code:           {}", self.code)?;
        writeln!(f, "Country:        {}", self.country)?;
        writeln!(f, "Cost:           {:.2}", self.cost)?;
        write!(f, "Quantity:       {}", self.quantity)
    }
}

/// Raw, unvalidated input for a new shoe.
#[derive(Debug, Clone, Default)]
pub struct NewShoe {
    pub country: String,
    pub code: String,
    pub product: String,
    pub cost: String,
    pub quantity: String,
}

impl NewShoe {
    /// Validates every field in capture order and builds the shoe.
    pub fn validate(&self) -> Result<Shoe> {
        let country = require_text(FIELD_COUNTRY, &self.country)?;
        let code = require_text(FIELD_CODE, &self.code)?;
        let product = require_text(FIELD_PRODUCT, &self.product)?;
        let cost = parse_cost(&self.cost)?;
        let quantity = parse_quantity(&self.quantity)?;
        Ok(Shoe::new(country, code, product, cost, quantity))
    }
}

/// Returns the trimmed value, or `EmptyField` when nothing is left.
pub fn require_text(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StockError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

pub fn parse_cost(value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(cost) if cost.is_finite() => Ok(cost),
        _ => Err(StockError::InvalidInput {
            field: FIELD_COST,
            value: value.to_string(),
        }),
    }
}

pub fn parse_quantity(value: &str) -> Result<i64> {
    parse_count(FIELD_QUANTITY, value)
}

/// Parses an integer count for the named field.
pub fn parse_count(field: &'static str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| StockError::InvalidInput {
            field,
            value: value.to_string(),
        })
}
