//! Vellum Value - the runtime value model of the Vellum template language.
//!
//! # Architecture
//!
//! Template expressions evaluate to [`Value`]s: a closed set of runtime
//! kinds (numbers, date-like values, strings, booleans, sequences,
//! collections, hashes, and format-tagged markup output). The set is closed
//! on purpose: every dispatch site in the evaluation core is an exhaustive
//! match, so adding a kind here fails to compile until every site handles
//! it.
//!
//! Absence of a value ("missing/undefined") is *not* a `Value` variant; it
//! is `Option::<&Value>::None` at API boundaries, because missingness is
//! meaningful to callers (it can mean "treat as false" or "error") and must
//! not be confusable with a real value.
//!
//! This crate also defines the structured error taxonomy ([`EvalError`],
//! [`EvalErrorKind`]) shared by the evaluation engines. Errors are data:
//! a kind with per-variant fields, an optional blamed [`Span`], and
//! secondary notes. Human-readable text is built by `Display` at the
//! presentation boundary, never inside the engines.

pub mod errors;
pub mod markup;

mod date;
mod number;
mod value;

pub use date::{DateKind, DateValue};
pub use errors::{EvalError, EvalErrorKind, EvalNote, EvalResult, OperandSide};
pub use markup::{HtmlFormat, MarkupFormat, MarkupFormatExt, MarkupValue, XmlFormat};
pub use number::Number;
pub use value::Value;

pub use vellum_ir::Span;
