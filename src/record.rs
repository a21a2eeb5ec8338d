//! Payment record model and row-level parsing.

use crate::amount::Amount;
use csv::StringRecord;
use std::str::FromStr;

/// One observation of money paid, attributable to a product, an origin
/// period, and a development period.
///
/// Records are immutable once parsed; aggregation borrows them and only
/// derives new output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    /// Product (line of business). Groups records into independent triangles.
    pub product: String,

    /// Period in which the underlying claim or policy originated. Absent
    /// when the field is blank; such records cannot be placed in a triangle.
    pub origin_year: Option<i32>,

    /// Period in which this increment of payment was made.
    pub development_year: i32,

    /// Payment amount for this origin/development cell. Absent means
    /// "no data", which is distinct from an explicit zero and is only
    /// coerced to zero at the point of summation.
    pub incremental_value: Option<Amount>,
}

impl PaymentRecord {
    /// Parses one positional CSV row:
    /// `product, origin year, development year, incremental value`.
    ///
    /// Returns `None` if the row cannot represent a payment record: a
    /// missing or non-numeric development year, or a non-empty but
    /// unparseable value in one of the optional numeric fields. Blank or
    /// missing optional fields map to absent. Fields past the fourth are
    /// ignored.
    pub fn parse_row(row: &StringRecord) -> Option<PaymentRecord> {
        let product = row.get(0)?.trim().to_string();
        let origin_year = optional_field(row.get(1))?;
        let development_year = row.get(2)?.trim().parse().ok()?;
        let incremental_value = optional_field(row.get(3))?;

        Some(PaymentRecord {
            product,
            origin_year,
            development_year,
            incremental_value,
        })
    }
}

/// Maps an optional numeric field: absent or blank is `Some(None)`, a
/// parseable value is `Some(Some(v))`, and a malformed value is `None`
/// (the row is rejected, not defaulted).
fn optional_field<T: FromStr>(field: Option<&str>) -> Option<Option<T>> {
    match field.map(str::trim) {
        None | Some("") => Some(None),
        Some(raw) => raw.parse().ok().map(Some),
    }
}
