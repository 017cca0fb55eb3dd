//! Vellum Eval - the value-evaluation core of the Vellum template runtime.
//!
//! This crate gives runtime meaning to template expressions over the
//! [`Value`] model: what it means to compare two dynamically-typed values,
//! to turn a value into output text, and to join two pieces of formatted
//! output that may be rendered in different markup formats.
//!
//! # Architecture
//!
//! - [`compare`]: the comparison engine - the six relational/equality
//!   operators across all legal type-pairs, with per-call options for
//!   missing operands and lenient kind mismatches.
//! - [`coerce`]: the textual coercion engine - three policies (allow
//!   markup, forbid markup, force plain text) plus a probing shape.
//! - [`concat`]: the markup concatenation resolver - same-format fast
//!   path and the plain-text degrade bridge between formats.
//! - [`context`]: the [`EvalContext`] capability object carrying the
//!   pluggable strategies (arithmetic engine, collator, formatters).
//!
//! The core is stateless and synchronous: every operation is a pure
//! function of its arguments plus the read-only context, so concurrent
//! evaluation is safe whenever the injected strategies are.
//!
//! # Re-exports
//!
//! Value and error types from `vellum_value` are re-exported for
//! convenience: `Value`, `Number`, `DateKind`, `DateValue`,
//! `MarkupValue`, `MarkupFormat`, `EvalError`, `EvalErrorKind`,
//! `EvalResult`.

pub mod arith;
pub mod coerce;
pub mod collate;
pub mod compare;
pub mod concat;
pub mod context;
pub mod format;

#[cfg(test)]
mod tests;

pub use arith::{ArithmeticEngine, ArithmeticError, DecimalArithmetic};
pub use coerce::{
    coerce_to_plain_text, coerce_to_string_or_markup, coerce_to_string_or_unsupported_markup,
    try_coerce_to_string_or_markup,
};
pub use collate::{CodepointCollator, Collator};
pub use compare::{
    compare_operands, compare_values, compare_values_lenient, CompareOptions, Operand,
};
pub use concat::concat_markup_outputs;
pub use context::{EvalContext, EvalContextBuilder};
pub use format::{
    BooleanFormat, DateFormat, DefaultBooleanFormat, DefaultDateFormat, DefaultNumberFormat,
    FormatError, NumberFormat, TextOrMarkup,
};

// Re-export value and error types from vellum_value
pub use vellum_value::{
    DateKind, DateValue, EvalError, EvalErrorKind, EvalNote, EvalResult, HtmlFormat, MarkupFormat,
    MarkupFormatExt, MarkupValue, Number, OperandSide, Value, XmlFormat,
};

// Re-export from vellum_ir for convenience
pub use vellum_ir::{CmpOp, Span};
