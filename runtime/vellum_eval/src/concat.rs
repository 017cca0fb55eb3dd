//! The markup concatenation resolver.
//!
//! Joining two markup values is trivial when they share an output format
//! and a reconciliation problem when they do not: markup of one format
//! must never be spliced verbatim into another. The only safe bridge is a
//! value that still knows its plain source text, which can be re-escaped
//! under the other operand's format.

use vellum_ir::Span;
use vellum_value::errors::formats_not_unifiable;
use vellum_value::{EvalResult, MarkupFormatExt, MarkupValue};

/// Concatenate two markup values, reconciling differing output formats.
///
/// Same format: delegate to that format's native concatenation, never a
/// plain-text detour. Different formats: if the right operand can degrade
/// to plain source text, re-escape it under the left format and join
/// there; otherwise try the symmetric case. The order is an observable
/// tie-break: when both operands are plain-text-representable, the *left*
/// operand's format wins as the result format.
///
/// `parent_span` blames the joining expression when reconciliation fails.
pub fn concat_markup_outputs(
    parent_span: Option<Span>,
    left: &MarkupValue,
    right: &MarkupValue,
) -> EvalResult<MarkupValue> {
    if left.same_format(right) {
        return left.format().concat(left, right);
    }
    if let Some(right_plain) = right.source_plain_text() {
        tracing::trace!(
            left = left.format_name(),
            right = right.format_name(),
            "cross-format concat, re-escaping right operand under left format"
        );
        let reescaped = left.format().from_plain_text_by_escaping(right_plain);
        return left.format().concat(left, &reescaped);
    }
    if let Some(left_plain) = left.source_plain_text() {
        tracing::trace!(
            left = left.format_name(),
            right = right.format_name(),
            "cross-format concat, re-escaping left operand under right format"
        );
        let reescaped = right.format().from_plain_text_by_escaping(left_plain);
        return right.format().concat(&reescaped, right);
    }
    Err(formats_not_unifiable(left.format_name(), right.format_name()).with_span_opt(parent_span))
}
