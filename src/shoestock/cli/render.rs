//! Text rendering for command results.
//!
//! Every function returns a `String` so callers decide where it goes; the
//! session writes to whatever output it was given.

use colored::Colorize;
use shoestock::api::{CmdMessage, ListedShoe, MessageLevel, StockValue};
use shoestock::config::{StockConfig, KEYS};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const RULE: &str = "----------------------------------------";
const PRODUCT_WIDTH: usize = 28;
const COUNTRY_WIDTH: usize = 16;
const CODE_WIDTH: usize = 10;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_error(message: &str) -> String {
    format!("{}\n", message.red())
}

/// The full block for one shoe.
pub fn render_shoe(listed: &ListedShoe, currency: &str) -> String {
    let shoe = &listed.shoe;
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Product:        {}\n", shoe.product.bold()));
    out.push_str(&format!("Code:           {}\n", shoe.code));
    out.push_str(&format!("Country:        {}\n", shoe.country));
    out.push_str(&format!("Cost:           {}{:.2}\n", currency, shoe.cost));
    out.push_str(&format!("Quantity:       {}\n", shoe.quantity));
    out.push_str(RULE);
    out.push('\n');
    out
}

/// One aligned row per shoe, prefixed by its position.
pub fn render_table(shoes: &[ListedShoe], currency: &str) -> String {
    if shoes.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {}{}{}{:>12}{:>10}\n",
        "#",
        pad_to_width("Product", PRODUCT_WIDTH),
        pad_to_width("Code", CODE_WIDTH),
        pad_to_width("Country", COUNTRY_WIDTH),
        "Cost",
        "Qty"
    ));
    for listed in shoes {
        let shoe = &listed.shoe;
        let quantity = if shoe.quantity <= 0 {
            shoe.quantity.to_string().red()
        } else {
            shoe.quantity.to_string().normal()
        };
        out.push_str(&format!(
            "{:>4}  {}{}{}{:>12}{:>10}\n",
            format!("{}.", listed.position).yellow(),
            pad_to_width(&shoe.product, PRODUCT_WIDTH),
            pad_to_width(&shoe.code, CODE_WIDTH),
            pad_to_width(&shoe.country, COUNTRY_WIDTH),
            format!("{}{:.2}", currency, shoe.cost),
            quantity
        ));
    }
    out
}

pub fn render_value(report: &StockValue, currency: &str) -> String {
    let mut out = String::new();
    for line in &report.lines {
        let shoe = &line.listed.shoe;
        out.push_str(&format!(
            "{:>4}  {}{}{:>16}\n",
            format!("{}.", line.listed.position),
            pad_to_width(&shoe.product, PRODUCT_WIDTH),
            pad_to_width(&shoe.code, CODE_WIDTH),
            format!("{}{:.2}", currency, line.value)
        ));
    }
    out.push_str(&format!(
        "{}{:>16}\n",
        pad_to_width("Total stock value", 6 + PRODUCT_WIDTH + CODE_WIDTH),
        format!("{}{:.2}", currency, report.total).bold()
    ));
    out
}

pub fn render_config(config: &StockConfig) -> String {
    KEYS.iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

/// Truncates with an ellipsis or pads with spaces to exactly `width` columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current = 0;

    if s.width() >= width {
        for c in s.chars() {
            let char_width = c.width().unwrap_or(0);
            if current + char_width > width.saturating_sub(2) {
                result.push('…');
                current += 1;
                break;
            }
            result.push(c);
            current += char_width;
        }
    } else {
        result.push_str(s);
        current = s.width();
    }

    result.push_str(&" ".repeat(width.saturating_sub(current)));
    result
}
