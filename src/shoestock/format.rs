//! # Backing File Format
//!
//! The inventory is a plain, line-oriented text file:
//!
//! ```text
//! Country,Code,Product,Cost,Quantity
//! South Africa,SKU44386,Air Max 90,2300.00,20
//! China,SKU90000,Jordan 1,3200.00,50
//! ```
//!
//! Every line, the header included, ends with `\n`. Fields are split on `,`
//! with no quoting, so a value containing a comma cannot be stored.
//!
//! Parsing has two tolerance modes. Lenient parsing (the default) skips any
//! data line that does not hold exactly five fields and only counts the
//! skips. Strict parsing stops at the first such line and also requires the
//! header to match [`HEADER`]. In either mode a five-field line whose cost or
//! quantity does not convert fails the whole parse with `TypeConversion`.
//!
//! Costs are written by [`crate::model::format_cost`], so rendering a parsed
//! inventory reproduces the same values.

use crate::error::{Result, StockError};
use crate::model::Shoe;

pub const HEADER: &str = "Country,Code,Product,Cost,Quantity";
pub const DELIMITER: char = ',';
const FIELD_COUNT: usize = 5;

/// Outcome of parsing a backing file.
#[derive(Debug, Default)]
pub struct ParsedInventory {
    pub shoes: Vec<Shoe>,
    /// Data lines dropped by lenient parsing.
    pub skipped: usize,
}

pub fn parse_inventory(text: &str, strict: bool) -> Result<ParsedInventory> {
    let mut parsed = ParsedInventory::default();
    let mut lines = text.lines();

    match lines.next() {
        None => return Ok(parsed),
        Some(header) => {
            if strict && header.trim() != HEADER {
                return Err(StockError::BadHeader(header.to_string()));
            }
        }
    }

    // Line numbers are 1-based and the header is line 1.
    for (offset, raw) in lines.enumerate() {
        let line_no = offset + 2;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line, line_no) {
            Ok(shoe) => parsed.shoes.push(shoe),
            Err(e @ StockError::MalformedLine { .. }) if !strict => {
                log::debug!("skipping line {}: {}", line_no, e);
                parsed.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(parsed)
}

pub fn parse_line(line: &str, line_no: usize) -> Result<Shoe> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(StockError::MalformedLine {
            line: line_no,
            fields: fields.len(),
        });
    }
    Shoe::from_fields(fields[0], fields[1], fields[2], fields[3], fields[4])
}

/// Renders the complete file: header followed by one line per shoe.
pub fn render_inventory(shoes: &[Shoe]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + shoes.len() * 48);
    out.push_str(HEADER);
    out.push('\n');
    for shoe in shoes {
        out.push_str(&render_line(shoe));
    }
    out
}

/// A single record line including its terminating newline.
pub fn render_line(shoe: &Shoe) -> String {
    format!("{}\n", shoe.to_line())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Country,Code,Product,Cost,Quantity\n\
                          SA,A001,Nike Air,60.00,10\n\
                          SA,A002,Puma Flex,45.00,3\n";

    #[test]
    fn parses_records_in_file_order() {
        let parsed = parse_inventory(SAMPLE, false).unwrap();
        assert_eq!(parsed.shoes.len(), 2);
        assert_eq!(parsed.shoes[0].code, "A001");
        assert_eq!(parsed.shoes[1].code, "A002");
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn empty_text_is_an_empty_inventory() {
        let parsed = parse_inventory("", true).unwrap();
        assert!(parsed.shoes.is_empty());
    }

    #[test]
    fn header_only_is_an_empty_inventory() {
        let parsed = parse_inventory("Country,Code,Product,Cost,Quantity\n", true).unwrap();
        assert!(parsed.shoes.is_empty());
    }

    #[test]
    fn lenient_mode_skips_wrong_field_counts_and_blank_lines() {
        let text = "Country,Code,Product,Cost,Quantity\n\
                    SA,A001,Nike Air,60.00,10\n\
                    \n\
                    SA,A003,Too,Many,Fields,Here\n\
                    SA,A004,Short\n\
                    SA,A002,Puma Flex,45.00,3\n";
        let parsed = parse_inventory(text, false).unwrap();
        assert_eq!(parsed.shoes.len(), 2);
        assert_eq!(parsed.skipped, 2);
    }

    #[test]
    fn lenient_mode_rejects_unconvertible_numbers() {
        let text = "Country,Code,Product,Cost,Quantity\n\
                    SA,A001,Nike Air,60.00,10\n\
                    SA,A002,Puma,cheap,3\n";
        let err = parse_inventory(text, false).unwrap_err();
        assert!(matches!(
            err,
            StockError::TypeConversion { field: "Cost", .. }
        ));
    }

    #[test]
    fn strict_mode_reports_the_first_malformed_line() {
        let text = "Country,Code,Product,Cost,Quantity\n\
                    SA,A001,Nike Air,60.00,10\n\
                    SA,A004,Short\n";
        let err = parse_inventory(text, true).unwrap_err();
        assert!(matches!(
            err,
            StockError::MalformedLine { line: 3, fields: 3 }
        ));
    }

    #[test]
    fn strict_mode_reports_bad_numbers() {
        let text = "Country,Code,Product,Cost,Quantity\nSA,A001,Nike Air,60.00,many\n";
        let err = parse_inventory(text, true).unwrap_err();
        assert!(matches!(err, StockError::TypeConversion { .. }));
    }

    #[test]
    fn strict_mode_checks_the_header() {
        let err = parse_inventory("Code,Product\n", true).unwrap_err();
        assert!(matches!(err, StockError::BadHeader(_)));
        // Lenient mode never looks at it.
        assert!(parse_inventory("Code,Product\n", false).is_ok());
    }

    #[test]
    fn render_reproduces_parsed_records() {
        let parsed = parse_inventory(SAMPLE, true).unwrap();
        assert_eq!(render_inventory(&parsed.shoes), SAMPLE);
    }

    #[test]
    fn rewrite_keeps_costs_finer_than_cents() {
        let text = "Country,Code,Product,Cost,Quantity\nSA,A001,Nike Air,12.345,10\n";
        let parsed = parse_inventory(text, true).unwrap();
        let rendered = render_inventory(&parsed.shoes);
        assert_eq!(rendered, text);

        let reparsed = parse_inventory(&rendered, true).unwrap();
        assert_eq!(reparsed.shoes, parsed.shoes);
        assert_eq!(reparsed.shoes[0].cost, 12.345);
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let text = "Country,Code,Product,Cost,Quantity\r\nSA,A001,Nike Air,60.00,10\r\n";
        let parsed = parse_inventory(text, true).unwrap();
        assert_eq!(parsed.shoes.len(), 1);
        assert_eq!(parsed.shoes[0].quantity, 10);
    }
}
