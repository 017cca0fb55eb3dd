//! The textual coercion engine.
//!
//! Turns a value into output text. There are three policies, each its own
//! entry point rather than a flag, because they accept different inputs
//! and promise different outputs:
//!
//! - [`coerce_to_string_or_markup`]: the general output path. Numbers and
//!   dates go through the context's formatter, whose result may be text
//!   *or* markup; markup values pass through unchanged.
//! - [`coerce_to_string_or_unsupported_markup`]: for callers that
//!   structurally cannot consume markup (string built-ins, say). A
//!   formatter producing markup is an error here, and markup *input* is
//!   not accepted at all.
//! - [`coerce_to_plain_text`]: forces the plain-text formatting path even
//!   when the configured formatter would produce markup.
//!
//! [`try_coerce_to_string_or_markup`] is the probing shape: where the
//! failing shape would reject a value's kind, it reports absence instead.
//! It is a distinct function, not a flag, so the failure contract of the
//! other entry points never silently changes.
//!
//! All other kinds funnel through a common textual tail shared by the
//! three policies.

use vellum_ir::Span;
use vellum_value::errors::{cannot_format, missing_value, not_string_coercible};
use vellum_value::{EvalNote, EvalResult, Value};

use crate::context::EvalContext;
use crate::format::TextOrMarkup;

/// Coerce a value to text or markup.
///
/// `seq_hint` is an optional caller-supplied usage hint (e.g. "this
/// directive needs a string") attached to the error when the value turns
/// out to be a sequence or collection.
pub fn coerce_to_string_or_markup(
    value: Option<&Value>,
    span: Option<Span>,
    seq_hint: Option<&str>,
    ctx: &EvalContext,
) -> EvalResult<TextOrMarkup> {
    match value {
        Some(Value::Number(n)) => ctx
            .number_format()
            .format(n)
            .map_err(|e| cannot_format("number", e.message()).with_span_opt(span)),
        Some(Value::Date(d)) => ctx
            .date_format()
            .format(d)
            .map_err(|e| cannot_format("date-like value", e.message()).with_span_opt(span)),
        Some(Value::Markup(m)) => Ok(TextOrMarkup::Markup(m.clone())),
        other => {
            coerce_textual_common(other, span, seq_hint, true, ctx).map(TextOrMarkup::Text)
        }
    }
}

/// Coerce a value to a string, in a context that cannot consume markup.
///
/// Numbers and dates are formatted normally, but a markup result is an
/// error; a markup-valued operand is rejected outright.
pub fn coerce_to_string_or_unsupported_markup(
    value: Option<&Value>,
    span: Option<Span>,
    seq_hint: Option<&str>,
    ctx: &EvalContext,
) -> EvalResult<String> {
    match value {
        Some(Value::Number(n)) => {
            let formatted = ctx
                .number_format()
                .format(n)
                .map_err(|e| cannot_format("number", e.message()).with_span_opt(span))?;
            ensure_text(formatted, span)
        }
        Some(Value::Date(d)) => {
            let formatted = ctx
                .date_format()
                .format(d)
                .map_err(|e| cannot_format("date-like value", e.message()).with_span_opt(span))?;
            ensure_text(formatted, span)
        }
        other => coerce_textual_common(other, span, seq_hint, false, ctx),
    }
}

/// Coerce a value to plain text, bypassing markup-producing formatters.
///
/// Numbers and dates take the plain-text-only formatting path; everything
/// else behaves as in the string-only coercion.
pub fn coerce_to_plain_text(
    value: Option<&Value>,
    span: Option<Span>,
    seq_hint: Option<&str>,
    ctx: &EvalContext,
) -> EvalResult<String> {
    match value {
        Some(Value::Number(n)) => ctx
            .number_format()
            .format_to_plain_text(n)
            .map_err(|e| cannot_format("number", e.message()).with_span_opt(span)),
        Some(Value::Date(d)) => ctx
            .date_format()
            .format_to_plain_text(d)
            .map_err(|e| cannot_format("date-like value", e.message()).with_span_opt(span)),
        other => coerce_textual_common(other, span, seq_hint, false, ctx),
    }
}

/// Probe whether a value coerces to text or markup.
///
/// Kinds the failing shape would reject with a not-coercible error yield
/// `Ok(None)` here; every other failure (missing value, formatter
/// failure) is still an error, so absence means exactly "wrong kind of
/// value", never a swallowed fault.
pub fn try_coerce_to_string_or_markup(
    value: Option<&Value>,
    span: Option<Span>,
    ctx: &EvalContext,
) -> EvalResult<Option<TextOrMarkup>> {
    match value {
        Some(Value::Sequence(_) | Value::Collection(_) | Value::Hash(_)) => Ok(None),
        coercible => coerce_to_string_or_markup(coercible, span, None, ctx).map(Some),
    }
}

/// Reject a markup formatter result in a string-only context.
fn ensure_text(formatted: TextOrMarkup, span: Option<Span>) -> EvalResult<String> {
    match formatted {
        TextOrMarkup::Text(s) => Ok(s),
        TextOrMarkup::Markup(m) => Err(vellum_value::errors::formatted_to_markup(
            m.format_name(),
        )
        .with_span_opt(span)),
    }
}

/// The shared tail of all three coercion policies, for the kinds that are
/// not number/date/markup.
///
/// `markup_allowed` records whether the calling policy could have accepted
/// markup; it decides the error subtype so the message can tell the user
/// why markup did not save them.
fn coerce_textual_common(
    value: Option<&Value>,
    span: Option<Span>,
    seq_hint: Option<&str>,
    markup_allowed: bool,
    ctx: &EvalContext,
) -> EvalResult<String> {
    match value {
        Some(Value::Str(s)) => Ok(s.to_string()),
        None => Err(missing_value(None).with_span_opt(span)),
        Some(Value::Bool(b)) => ctx
            .boolean_format()
            .format(*b)
            .map_err(|e| cannot_format("boolean", e.message()).with_span_opt(span)),
        Some(v @ (Value::Sequence(_) | Value::Collection(_))) => {
            let mut err = not_string_coercible(v.type_name(), markup_allowed).with_span_opt(span);
            if let Some(hint) = seq_hint {
                err = err.with_note(EvalNote::new(hint));
            }
            Err(err)
        }
        Some(v) => Err(not_string_coercible(v.type_name(), markup_allowed).with_span_opt(span)),
    }
}
