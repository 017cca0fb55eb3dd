//! Runtime values of the template language.

use std::sync::Arc;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::date::{DateKind, DateValue};
use crate::markup::MarkupValue;
use crate::number::Number;

/// Runtime value produced by evaluating a template expression.
///
/// The set of kinds is closed: the comparison, coercion, and concatenation
/// engines all dispatch over it with exhaustive matches, so a new kind
/// cannot be added without deciding its behavior at every site.
///
/// Values are immutable and cheap to clone; compound kinds share their
/// payload behind `Arc`. Construction goes through the factory methods.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Numeric value, in any of the supported representations.
    Number(Number),
    /// Date-like value with a precision tag and an instant.
    Date(DateValue),
    /// String value.
    Str(Arc<str>),
    /// Boolean value.
    Bool(bool),
    /// Indexed sequence of values.
    Sequence(Arc<Vec<Value>>),
    /// Iterable collection without index access.
    Collection(Arc<Vec<Value>>),
    /// String-keyed hash of values.
    Hash(Arc<FxHashMap<String, Value>>),
    /// Format-tagged markup output.
    Markup(MarkupValue),
}

impl Value {
    /// Create an integer number value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Number(Number::Int(n))
    }

    /// Create a float number value.
    #[inline]
    pub fn float(n: f64) -> Self {
        Value::Number(Number::Float(n))
    }

    /// Create a decimal number value.
    #[inline]
    pub fn decimal(d: Decimal) -> Self {
        Value::Number(Number::Decimal(d))
    }

    /// Create a date-like value from a kind and epoch-millisecond instant.
    #[inline]
    pub fn date(kind: DateKind, instant_millis: i64) -> Self {
        Value::Date(DateValue::new(kind, instant_millis))
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Arc::from(s.into()))
    }

    /// Create a sequence value.
    #[inline]
    pub fn sequence(items: Vec<Value>) -> Self {
        Value::Sequence(Arc::new(items))
    }

    /// Create a collection value.
    #[inline]
    pub fn collection(items: Vec<Value>) -> Self {
        Value::Collection(Arc::new(items))
    }

    /// Create a hash value.
    #[inline]
    pub fn hash(entries: FxHashMap<String, Value>) -> Self {
        Value::Hash(Arc::new(entries))
    }

    /// Create a markup output value.
    #[inline]
    pub fn markup(markup: MarkupValue) -> Self {
        Value::Markup(markup)
    }

    /// The user-facing kind description, used in diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Date(_) => "date-like value",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Sequence(_) => "sequence",
            Value::Collection(_) => "collection",
            Value::Hash(_) => "hash",
            Value::Markup(_) => "markup output",
        }
    }
}
