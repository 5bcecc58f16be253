//! Interactive prompting and the menu loop.
//!
//! [`Console`] wraps any reader/writer pair so the same dialogs drive both
//! the real terminal and scripted input in tests. End of input is reported
//! as `None` and always means "stop asking".

use super::render::{
    render_error, render_messages, render_shoe, render_table, render_value,
};
use shoestock::api::{CmdResult, RestockState, StockApi};
use shoestock::error::Result;
use shoestock::model::{
    parse_cost, require_text, NewShoe, FIELD_CODE, FIELD_COUNTRY, FIELD_PRODUCT,
};
use shoestock::store::DataStore;
use std::io::{BufRead, Write};

const MENU: &str = "
Shoe Inventory Menu
  1. Load inventory
  2. Add a shoe
  3. View all shoes
  4. Search by code
  5. Restock lowest quantity
  6. Stock value per item
  7. Highest quantity (on sale)
  q. Quit
";

pub struct Console<R, W> {
    input: R,
    output: W,
    currency: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, currency: impl Into<String>) -> Self {
        Self {
            input,
            output,
            currency: currency.into(),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        self.write(&render_error(message))
    }

    /// Writes the shoes, stock report and messages carried by a result.
    pub fn show(&mut self, result: &CmdResult) -> Result<()> {
        let mut out = String::new();
        if result.listed_shoes.len() == 1 {
            out.push_str(&render_shoe(&result.listed_shoes[0], &self.currency));
        } else {
            out.push_str(&render_table(&result.listed_shoes, &self.currency));
        }
        if let Some(report) = &result.stock_value {
            out.push_str(&render_value(report, &self.currency));
        }
        out.push_str(&render_messages(&result.messages));
        self.write(&out)
    }
}

/// Values already known for a new shoe; anything missing is prompted for.
#[derive(Debug, Default)]
pub struct ShoePreset {
    pub country: Option<String>,
    pub code: Option<String>,
    pub product: Option<String>,
    pub cost: Option<String>,
    pub quantity: Option<String>,
}

fn field<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    preset: Option<String>,
    label: &str,
) -> Result<Option<String>> {
    match preset {
        Some(value) => Ok(Some(value)),
        None => console.ask(label),
    }
}

/// Collects a new shoe field by field, stopping at the first invalid value.
///
/// Text fields and the cost are checked as soon as they are entered; the
/// complete record is validated again by the add command.
pub fn capture_shoe<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    preset: ShoePreset,
) -> Result<Option<NewShoe>> {
    let Some(country) = field(console, preset.country, "Enter the country: ")? else {
        return Ok(None);
    };
    require_text(FIELD_COUNTRY, &country)?;

    let Some(code) = field(console, preset.code, "Enter the shoe code: ")? else {
        return Ok(None);
    };
    require_text(FIELD_CODE, &code)?;

    let Some(product) = field(console, preset.product, "Enter the product name: ")? else {
        return Ok(None);
    };
    require_text(FIELD_PRODUCT, &product)?;

    let Some(cost) = field(console, preset.cost, "Enter the cost: ")? else {
        return Ok(None);
    };
    parse_cost(&cost)?;

    let Some(quantity) = field(console, preset.quantity, "Enter the quantity: ")? else {
        return Ok(None);
    };

    Ok(Some(NewShoe {
        country,
        code,
        product,
        cost,
        quantity,
    }))
}

pub fn add_dialog<S: DataStore, R: BufRead, W: Write>(
    api: &mut StockApi<S>,
    console: &mut Console<R, W>,
    preset: ShoePreset,
) -> Result<()> {
    match capture_shoe(console, preset)? {
        Some(input) => {
            let result = api.add_shoe(&input)?;
            console.show(&result)
        }
        None => console.write("\nAdd cancelled.\n"),
    }
}

/// Runs one restock: select, confirm, collect the quantity.
pub fn restock_dialog<S: DataStore, R: BufRead, W: Write>(
    api: &mut StockApi<S>,
    console: &mut Console<R, W>,
    skip_confirm: bool,
    amount: Option<String>,
) -> Result<()> {
    let selected = api.begin_restock()?;
    console.show(&selected)?;

    let reply = if skip_confirm {
        "yes".to_string()
    } else {
        console
            .ask("Do you want to restock this shoe? (yes/no): ")?
            .unwrap_or_default()
    };
    let answered = api.confirm_restock(&reply)?;
    console.show(&answered)?;

    if !matches!(api.restock_state(), RestockState::Confirmed { .. }) {
        return Ok(());
    }

    let raw = match amount {
        Some(amount) => amount,
        None => console.ask("Enter quantity to add: ")?.unwrap_or_default(),
    };
    let result = api.finish_restock(&raw)?;
    console.show(&result)
}

/// The interactive menu. Errors are printed and the loop carries on; it ends
/// on `q` or end of input.
pub fn run_menu<S: DataStore, R: BufRead, W: Write>(
    api: &mut StockApi<S>,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        console.write(MENU)?;
        let Some(choice) = console.ask("Enter your choice: ")? else {
            console.write("\n")?;
            break;
        };

        let outcome = match choice.trim().to_lowercase().as_str() {
            "1" => api.load().and_then(|r| console.show(&r)),
            "2" => add_dialog(api, console, ShoePreset::default()),
            "3" => {
                let result = api.view();
                console.show(&result)
            }
            "4" => match console.ask("Enter the shoe code to search: ")? {
                Some(code) => {
                    let result = api.search(&code);
                    console.show(&result)
                }
                None => break,
            },
            "5" => restock_dialog(api, console, false, None),
            "6" => {
                let result = api.stock_value();
                console.show(&result)
            }
            "7" => api.highest().and_then(|r| console.show(&r)),
            "q" | "quit" | "exit" => {
                console.write("Goodbye!\n")?;
                break;
            }
            other => {
                console.error(&format!("Invalid choice: '{}'", other))?;
                Ok(())
            }
        };

        if let Err(e) = outcome {
            log::debug!("menu operation failed: {:?}", e);
            console.error(&format!("Error: {}", e))?;
        }
    }
    Ok(())
}
