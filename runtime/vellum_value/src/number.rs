//! Numeric values.

use std::fmt;

use rust_decimal::Decimal;

/// Numeric value in a template.
///
/// Templates do not distinguish numeric types syntactically, so a number
/// can arrive in any of these representations depending on where the data
/// came from. Reconciling them for ordering is the arithmetic engine's job,
/// not this type's: `PartialEq` here is structural (`Int(1)` is not
/// `Float(1.0)`) and exists for tests and value identity only.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    /// Machine integer.
    Int(i64),
    /// IEEE 754 double. May be non-finite; the arithmetic engine decides
    /// whether that is comparable.
    Float(f64),
    /// Exact decimal, the representation data-binding layers prefer for
    /// money-like values.
    Decimal(Decimal),
}

impl Number {
    /// The representation name, used in diagnostics.
    pub const fn repr_name(&self) -> &'static str {
        match self {
            Number::Int(_) => "integer",
            Number::Float(_) => "float",
            Number::Decimal(_) => "decimal",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
            Number::Decimal(d) => write!(f, "{d}"),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

impl From<Decimal> for Number {
    fn from(d: Decimal) -> Self {
        Number::Decimal(d)
    }
}
