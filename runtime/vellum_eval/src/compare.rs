//! The comparison engine.
//!
//! Implements the six relational/equality operators across all legal
//! type-pairs. Dispatch is a single exhaustive match over the pair of
//! operand kinds, so adding a value kind forces a decision here.
//!
//! Which pairs are legal:
//! - Number × Number and Date × Date support all six operators;
//! - Str × Str and Bool × Bool support only `==`/`!=`;
//! - everything else is an incompatible-types error, unless the caller
//!   opted into treating kind mismatches as not-equal.
//!
//! Every failure blames a source span when one is known: the offending
//! operand's own span where the error is one-sided (missing operand,
//! unknown date kind), the caller's `default_blamed` span otherwise.

use std::cmp::Ordering;

use vellum_ir::{CmpOp, Span};
use vellum_value::errors::{
    date_kind_mismatch, illegal_operator, incompatible_types, missing_value, number_comparison,
    unknown_date_kind,
};
use vellum_value::{DateValue, EvalNote, EvalResult, OperandSide, Value};

use crate::context::EvalContext;

/// Per-call comparison options.
///
/// The two `*_missing_is_false` flags and `type_mismatch_is_not_equal` are
/// the only sanctioned points where a comparison error is downgraded to a
/// value, and they are opt-in per call site. Date-kind mismatches are
/// never downgraded.
#[derive(Copy, Clone, Debug, Default)]
pub struct CompareOptions<'a> {
    /// The surface operator token as written in the template (e.g. `lt`
    /// where the operator is `<`), for accurate error messages. Falls
    /// back to the operator's canonical symbol.
    pub op_symbol: Option<&'a str>,
    /// Span blamed when a failure is not specific to one operand, or when
    /// the specific operand has no span of its own.
    pub default_blamed: Option<Span>,
    /// Treat incompatible operand kinds as not-equal instead of failing.
    /// Only affects `==`/`!=`; relational operators still fail, and
    /// date-kind mismatches always fail.
    pub type_mismatch_is_not_equal: bool,
    /// A missing left operand makes the comparison `false` instead of
    /// failing.
    pub left_missing_is_false: bool,
    /// A missing right operand makes the comparison `false` instead of
    /// failing.
    pub right_missing_is_false: bool,
}

/// One side of a comparison: the evaluated value (or its absence) plus the
/// source span of the expression that produced it.
///
/// This is the spanned calling convention: the evaluator owns expression
/// evaluation, so what crosses the boundary is the value together with
/// enough location to blame precisely.
#[derive(Copy, Clone, Debug)]
pub struct Operand<'a> {
    value: Option<&'a Value>,
    span: Option<Span>,
}

impl<'a> Operand<'a> {
    /// An operand with no source location.
    pub fn new(value: Option<&'a Value>) -> Self {
        Operand { value, span: None }
    }

    /// Attach the source span of the originating expression.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

impl<'a> From<&'a Value> for Operand<'a> {
    fn from(value: &'a Value) -> Self {
        Operand::new(Some(value))
    }
}

/// Compare two pre-evaluated values with default options.
///
/// Missing operands and incompatible kinds fail.
pub fn compare_values(
    left: Option<&Value>,
    op: CmpOp,
    right: Option<&Value>,
    ctx: &EvalContext,
) -> EvalResult<bool> {
    compare_operands(
        Operand::new(left),
        op,
        Operand::new(right),
        &CompareOptions::default(),
        ctx,
    )
}

/// Like [`compare_values`], but incompatible operand kinds are treated as
/// not-equal instead of failing. Date-kind mismatches still fail.
pub fn compare_values_lenient(
    left: Option<&Value>,
    op: CmpOp,
    right: Option<&Value>,
    ctx: &EvalContext,
) -> EvalResult<bool> {
    compare_operands(
        Operand::new(left),
        op,
        Operand::new(right),
        &CompareOptions {
            type_mismatch_is_not_equal: true,
            ..CompareOptions::default()
        },
        ctx,
    )
}

/// Compare two operands under explicit options. This is the full calling
/// convention; the other entry points are shorthands for it.
pub fn compare_operands(
    left: Operand<'_>,
    op: CmpOp,
    right: Operand<'_>,
    options: &CompareOptions<'_>,
    ctx: &EvalContext,
) -> EvalResult<bool> {
    tracing::trace!(op = %op, "comparing template values");

    // Missing-operand checks come first, independently per side.
    let Some(left_value) = left.value else {
        if options.left_missing_is_false {
            return Ok(false);
        }
        return Err(missing_value(Some(OperandSide::Left))
            .with_span_opt(left.span.or(options.default_blamed)));
    };
    let Some(right_value) = right.value else {
        if options.right_missing_is_false {
            return Ok(false);
        }
        return Err(missing_value(Some(OperandSide::Right))
            .with_span_opt(right.span.or(options.default_blamed)));
    };

    let op_symbol = options.op_symbol.unwrap_or(op.as_symbol());

    let ordering = match (left_value, right_value) {
        (Value::Number(a), Value::Number(b)) => ctx
            .arithmetic()
            .compare_numbers(a, b)
            .map_err(|e| {
                number_comparison(e.message()).with_span_opt(options.default_blamed)
            })?,
        (Value::Date(a), Value::Date(b)) => compare_dates(a, b, &left, &right, options)?,
        (Value::Str(a), Value::Str(b)) => {
            if !op.is_equality() {
                return Err(illegal_operator(op_symbol, "string")
                    .with_span_opt(options.default_blamed));
            }
            // Equality deliberately goes through the collator too: string
            // `==` is collation-sensitive in this language.
            ctx.collator().compare_strings(a, b)
        }
        (Value::Bool(a), Value::Bool(b)) => {
            if !op.is_equality() {
                return Err(illegal_operator(op_symbol, "boolean")
                    .with_span_opt(options.default_blamed));
            }
            // true > false, though only the equality pair can observe it.
            a.cmp(b)
        }
        (l, r) => {
            if options.type_mismatch_is_not_equal {
                match op {
                    CmpOp::Eq => return Ok(false),
                    CmpOp::NotEq => return Ok(true),
                    _ => {}
                }
            }
            let mut err = incompatible_types(l.type_name(), r.type_name())
                .with_span_opt(options.default_blamed);
            if let Some(span) = left.span {
                err = err.with_note(EvalNote::with_span("left operand", span));
            }
            if let Some(span) = right.span {
                err = err.with_note(EvalNote::with_span("right operand", span));
            }
            return Err(err);
        }
    };

    Ok(op_holds(op, ordering))
}

/// Map a signed comparison result to the requested operator's truth value.
fn op_holds(op: CmpOp, ordering: Ordering) -> bool {
    match op {
        CmpOp::Eq => ordering == Ordering::Equal,
        CmpOp::NotEq => ordering != Ordering::Equal,
        CmpOp::Lt => ordering == Ordering::Less,
        CmpOp::Gt => ordering == Ordering::Greater,
        CmpOp::LtEq => ordering != Ordering::Greater,
        CmpOp::GtEq => ordering != Ordering::Less,
    }
}

/// Order two date-like values.
///
/// Both precision tags must be known and identical; neither condition is
/// ever relaxed, because comparing instants of mismatched precision would
/// silently compare fields that are not there.
fn compare_dates(
    a: &DateValue,
    b: &DateValue,
    left: &Operand<'_>,
    right: &Operand<'_>,
    options: &CompareOptions<'_>,
) -> EvalResult<Ordering> {
    if !a.kind().is_known() || !b.kind().is_known() {
        let (side, span) = if a.kind().is_known() {
            (OperandSide::Right, right.span)
        } else {
            (OperandSide::Left, left.span)
        };
        return Err(unknown_date_kind(side).with_span_opt(span.or(options.default_blamed)));
    }
    if a.kind() != b.kind() {
        return Err(
            date_kind_mismatch(a.kind(), b.kind()).with_span_opt(options.default_blamed)
        );
    }
    Ok(a.instant_millis().cmp(&b.instant_millis()))
}
