//! Value enum for grid cell values

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// A typed value read from a row field.
///
/// The grid never looks inside a row directly. It asks the row for a
/// [`CellValue`] by column or filter key and works with that: searching and
/// filtering use the `Display` form, sorting uses the typed comparison.
///
/// # Example
///
/// ```
/// use hrconsole_lib::CellValue;
///
/// let name = CellValue::from("Amy");
/// let days = CellValue::from(3i64);
/// let missing = CellValue::Null;
///
/// assert_eq!(name.to_string(), "Amy");
/// assert_eq!(days.to_string(), "3");
/// assert_eq!(missing.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Missing value. Sorts last in both directions.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Exact decimal value (salaries, invoice amounts).
    Decimal(Decimal),
    /// Text value.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns `true` for null and for empty text, which sort after everything else.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Decimal(_) => "decimal",
            CellValue::Text(_) => "text",
            CellValue::Date(_) => "date",
        }
    }

    /// Returns `true` for the numeric variants.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CellValue::Int(_) | CellValue::Float(_) | CellValue::Decimal(_)
        )
    }

    /// Returns the value as a float, if numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            CellValue::Decimal(v) => v.to_f64(),
            _ => None,
        }
    }

    /// Returns the value as a date, if it is one.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the value as text, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Compares two numeric values.
    ///
    /// Integers and decimals compare exactly among themselves; any other
    /// pairing goes through `f64`. Returns `None` if either side is not
    /// numeric.
    pub fn compare_numeric(&self, other: &CellValue) -> Option<Ordering> {
        match (self, other) {
            (CellValue::Int(a), CellValue::Int(b)) => Some(a.cmp(b)),
            (CellValue::Decimal(a), CellValue::Decimal(b)) => Some(a.cmp(b)),
            (CellValue::Int(a), CellValue::Decimal(b)) => Some(Decimal::from(*a).cmp(b)),
            (CellValue::Decimal(a), CellValue::Int(b)) => Some(a.cmp(&Decimal::from(*b))),
            _ => {
                let a = self.as_f64()?;
                let b = other.as_f64()?;
                Some(a.partial_cmp(&b).unwrap_or(Ordering::Equal))
            }
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(v) => write!(f, "{}", v),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Decimal(v) => write!(f, "{}", v),
            CellValue::Text(v) => f.write_str(v),
            CellValue::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<Decimal> for CellValue {
    fn from(v: Decimal) -> Self {
        CellValue::Decimal(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<&String> for CellValue {
    fn from(v: &String) -> Self {
        CellValue::Text(v.clone())
    }
}

impl From<NaiveDate> for CellValue {
    fn from(v: NaiveDate) -> Self {
        CellValue::Date(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::from(true).to_string(), "true");
        assert_eq!(CellValue::from(1.5).to_string(), "1.5");
        assert_eq!(CellValue::from(Decimal::new(450075, 2)).to_string(), "4500.75");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(CellValue::from(date).to_string(), "2024-03-09");
    }

    #[test]
    fn test_compare_numeric_mixed() {
        let int = CellValue::from(10i64);
        let dec = CellValue::from(Decimal::new(95, 1));
        let float = CellValue::from(10.5);
        assert_eq!(int.compare_numeric(&dec), Some(Ordering::Greater));
        assert_eq!(int.compare_numeric(&float), Some(Ordering::Less));
        assert_eq!(int.compare_numeric(&CellValue::from("10")), None);
    }

    #[test]
    fn test_option_conversion() {
        assert!(CellValue::from(None::<i64>).is_null());
        assert_eq!(CellValue::from(Some("HR")), CellValue::Text("HR".into()));
    }
}
