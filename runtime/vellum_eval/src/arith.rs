//! Pluggable numeric comparison.
//!
//! Template numbers arrive in several representations ([`Number`]); how
//! they are reconciled for ordering is a policy decision, so it lives
//! behind the [`ArithmeticEngine`] trait and is selected per evaluation
//! context. The default, [`DecimalArithmetic`], promotes everything to
//! `rust_decimal::Decimal` and orders exactly.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use vellum_value::Number;

/// Domain error from an arithmetic engine, e.g. an operand with no
/// comparable representation. The comparison engine wraps it into an
/// evaluation error blamed on the comparison expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArithmeticError {
    message: String,
}

impl ArithmeticError {
    /// Create an error with a human-readable reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The reason text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ArithmeticError {}

/// Numeric comparison strategy.
///
/// Implementations must be pure: the same operands always produce the same
/// ordering, with no state carried between calls.
pub trait ArithmeticEngine: Send + Sync {
    /// Order two numbers, or fail if their representations cannot be
    /// reconciled.
    fn compare_numbers(&self, a: &Number, b: &Number) -> Result<Ordering, ArithmeticError>;
}

/// The default engine: exact decimal comparison.
///
/// Every representation is promoted to `Decimal`, so `Int(3)`,
/// `Float(3.0)`, and `Decimal(3.00)` all order as equal, and large
/// integers are not collapsed through a lossy float round-trip.
/// Non-finite floats have no decimal representation and are a domain
/// error.
pub struct DecimalArithmetic;

impl ArithmeticEngine for DecimalArithmetic {
    fn compare_numbers(&self, a: &Number, b: &Number) -> Result<Ordering, ArithmeticError> {
        let a = to_decimal(a)?;
        let b = to_decimal(b)?;
        Ok(a.cmp(&b))
    }
}

fn to_decimal(n: &Number) -> Result<Decimal, ArithmeticError> {
    match n {
        Number::Int(i) => Ok(Decimal::from(*i)),
        Number::Float(f) => Decimal::try_from(*f).map_err(|_| {
            ArithmeticError::new(format!(
                "{f} has no exact decimal representation (NaN, infinite, or out of range)"
            ))
        }),
        Number::Decimal(d) => Ok(*d),
    }
}
