//! Cumulative claims development triangle aggregation.
//!
//! Takes parsed payment records and derives the report lines: one header
//! naming the earliest origin year and the development period count, then
//! one line per product with running totals of incremental payments.

use crate::amount::Amount;
use crate::error::{Result, TriangleError};
use crate::record::PaymentRecord;
use itertools::Itertools;
use log::{debug, warn};
use std::collections::HashMap;

/// Aggregates payment records into cumulative development triangle lines.
///
/// The header line is `minOriginYear, periodCount`. Each product line then
/// walks every origin year `i` in `[min, max]` and, for each, accumulates
/// development years `j` in `[i, max]`, emitting the running total at every
/// step — so rows are wider than the declared period count for any origin
/// after the first. That shape is intentional and matches the report format
/// consumers already parse.
///
/// # Ordering
///
/// Products appear in first-seen input order; periods ascend. Output is
/// fully deterministic given input order.
///
/// # Errors
///
/// Records without an origin year cannot be placed and are ignored; if none
/// remain, returns [`TriangleError::NoRecords`]. If the earliest origin
/// year lies after the latest development year the period range is
/// degenerate and aggregation fails with
/// [`TriangleError::InvalidPeriodRange`] rather than emitting a malformed
/// header.
pub fn cumulative_triangle(records: &[PaymentRecord]) -> Result<Vec<String>> {
    let placed: Vec<(i32, i32, &PaymentRecord)> = records
        .iter()
        .filter_map(|r| r.origin_year.map(|origin| (origin, r.development_year, r)))
        .collect();

    let dropped = records.len() - placed.len();
    if dropped > 0 {
        warn!(
            "{} record(s) without an origin year cannot be placed in the triangle, ignoring",
            dropped
        );
    }

    let (mut min_origin, mut max_development) = match placed.first() {
        Some((origin, development, _)) => (*origin, *development),
        None => return Err(TriangleError::NoRecords),
    };
    for (origin, development, _) in &placed {
        min_origin = min_origin.min(*origin);
        max_development = max_development.max(*development);
    }

    let period_count = i64::from(max_development) - i64::from(min_origin) + 1;
    if period_count <= 0 {
        return Err(TriangleError::InvalidPeriodRange {
            min_origin,
            max_development,
        });
    }

    let inverted = placed
        .iter()
        .filter(|(origin, development, _)| development < origin)
        .count();
    if inverted > 0 {
        debug!(
            "{} record(s) have a development year before their origin year and never match a cell",
            inverted
        );
    }

    // First record in input order claims a cell; later duplicates are
    // ignored. A claimed cell with an absent value contributes 0, same as
    // no record at all.
    let mut cells: HashMap<(&str, i32, i32), Amount> = HashMap::new();
    for (origin, development, record) in &placed {
        cells
            .entry((record.product.as_str(), *origin, *development))
            .or_insert_with(|| record.incremental_value.unwrap_or(Amount::ZERO));
    }

    let products: Vec<&str> = placed
        .iter()
        .map(|(_, _, record)| record.product.as_str())
        .unique()
        .collect();

    let mut lines = Vec::with_capacity(products.len() + 1);
    lines.push(format!("{}, {}", min_origin, period_count));

    for product in products {
        let mut line = product.to_string();
        for origin in min_origin..=max_development {
            let mut amount = Amount::ZERO;
            for development in origin..=max_development {
                if let Some(value) = cells.get(&(product, origin, development)) {
                    amount += *value;
                }
                line.push_str(&format!(", {}", amount));
            }
        }
        lines.push(line);
    }

    Ok(lines)
}
