//! Stream-level parsing of delimited claims files.
//!
//! Parsing never fails: unparseable rows are logged and skipped, so an
//! empty or garbage stream yields an empty record set rather than an error.

use crate::record::PaymentRecord;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::Read;

/// Reads comma-delimited payment records from `reader`, preserving row
/// order.
///
/// Fields are positional (`product, origin year, development year,
/// incremental value`) and may carry surrounding whitespace. A header row
/// is optional: the first row is parsed like any other, and if it does not
/// have the shape of a payment record it is assumed to be the header and
/// dropped. Later rows that fail to parse are skipped with a warning.
pub fn parse_records<R: Read>(reader: R) -> Vec<PaymentRecord> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let row_num = row_idx + 1; // 1-indexed; no header row is assumed

        match result {
            Ok(row) => match PaymentRecord::parse_row(&row) {
                Some(record) => records.push(record),
                None if row_idx == 0 => {
                    debug!("Row 1: not a payment record, assuming a header row");
                }
                None => warn!("Row {}: skipping malformed record", row_num),
            },
            Err(e) => warn!("Row {}: CSV parse error: {}", row_num, e),
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_str(input: &str) -> Vec<PaymentRecord> {
        parse_records(Cursor::new(input))
    }

    #[test]
    fn test_header_row_is_skipped() {
        let input = "Product, Origin Year, Development Year, Incremental Value\n\
                     Comp, 1992, 1992, 110.0\n";

        let records = parse_str(input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product, "Comp");
        assert_eq!(records[0].origin_year, Some(1992));
        assert_eq!(records[0].development_year, 1992);
        assert_eq!(records[0].incremental_value, Some("110.0".parse().unwrap()));
    }

    #[test]
    fn test_headerless_input_keeps_first_row() {
        let records = parse_str("Comp,1992,1992,110.0\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product, "Comp");
    }

    #[test]
    fn test_blank_amount_parses_to_absent() {
        let input = "Product, Origin Year, Development Year, Incremental Value\n\
                     Comp, 1992, 1992,\n";

        let records = parse_str(input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].incremental_value, None);
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse_str("").is_empty());
    }

    #[test]
    fn test_garbage_input_yields_no_records() {
        assert!(parse_str("this is not\na claims file\nat all\n").is_empty());
    }

    #[test]
    fn test_malformed_rows_are_skipped_not_fatal() {
        let input = "Comp, 1992, 1992, 110.0\n\
                     Comp, 1992, twelve, 55.0\n\
                     Non-Comp, 1990, 1990, 45.2\n";

        let records = parse_str(input);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].product, "Comp");
        assert_eq!(records[1].product, "Non-Comp");
    }

    #[test]
    fn test_row_order_is_preserved() {
        let input = "B, 1991, 1991, 1\n\
                     A, 1990, 1990, 2\n\
                     B, 1990, 1991, 3\n";

        let records = parse_str(input);
        let products: Vec<&str> = records.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(products, ["B", "A", "B"]);
    }

    #[test]
    fn test_well_formed_row_round_trips() {
        let original = PaymentRecord {
            product: "Non-Comp".to_string(),
            origin_year: Some(1990),
            development_year: 1993,
            incremental_value: Some("37.0".parse().unwrap()),
        };
        let line = format!(
            "{},{},{},{}\n",
            original.product,
            original.origin_year.unwrap(),
            original.development_year,
            "37.0",
        );

        let records = parse_str(&line);
        assert_eq!(records, vec![original]);
    }
}
