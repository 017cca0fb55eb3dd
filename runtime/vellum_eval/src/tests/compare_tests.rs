//! Comparison engine tests.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::compare::{compare_operands, compare_values, compare_values_lenient, CompareOptions, Operand};
use crate::context::EvalContext;
use vellum_ir::{CmpOp, Span};
use vellum_value::{DateKind, EvalErrorKind, OperandSide, Value};

use super::CaseFoldCollator;

const ALL_OPS: [CmpOp; 6] = [
    CmpOp::Eq,
    CmpOp::NotEq,
    CmpOp::Lt,
    CmpOp::Gt,
    CmpOp::LtEq,
    CmpOp::GtEq,
];

fn cmp(left: &Value, op: CmpOp, right: &Value) -> Result<bool, EvalErrorKind> {
    compare_values(Some(left), op, Some(right), &EvalContext::default()).map_err(|e| e.kind)
}

#[test]
fn number_ordering_maps_through_every_operator() {
    let three = Value::int(3);
    let five = Value::int(5);
    assert_eq!(cmp(&three, CmpOp::Lt, &five), Ok(true));
    assert_eq!(cmp(&five, CmpOp::Lt, &five), Ok(false));
    assert_eq!(cmp(&five, CmpOp::LtEq, &five), Ok(true));
    assert_eq!(cmp(&five, CmpOp::Gt, &three), Ok(true));
    assert_eq!(cmp(&three, CmpOp::GtEq, &five), Ok(false));
    assert_eq!(cmp(&five, CmpOp::Eq, &five), Ok(true));
    assert_eq!(cmp(&three, CmpOp::NotEq, &five), Ok(true));
}

#[test]
fn mixed_numeric_representations_compare_equal() {
    assert_eq!(cmp(&Value::int(3), CmpOp::Eq, &Value::float(3.0)), Ok(true));
}

#[test]
fn nan_operand_is_a_number_comparison_error() {
    let err = cmp(&Value::float(f64::NAN), CmpOp::Lt, &Value::int(1)).unwrap_err();
    assert!(matches!(err, EvalErrorKind::NumberComparison { .. }));
}

#[test]
fn string_equality_works_and_relational_fails() {
    let a = Value::string("apple");
    let b = Value::string("banana");
    assert_eq!(cmp(&a, CmpOp::Eq, &b), Ok(false));
    assert_eq!(cmp(&a, CmpOp::NotEq, &b), Ok(true));
    for op in [CmpOp::Lt, CmpOp::Gt, CmpOp::LtEq, CmpOp::GtEq] {
        let err = cmp(&a, op, &b).unwrap_err();
        assert_eq!(
            err,
            EvalErrorKind::IllegalOperator {
                op: op.as_symbol().to_string(),
                type_name: "string",
            }
        );
    }
}

#[test]
fn string_equality_is_collation_sensitive() {
    // The documented quirk: == goes through the collator, so a
    // case-folding collator makes differently-cased strings equal.
    let ctx = EvalContext::builder()
        .with_collator(Arc::new(CaseFoldCollator))
        .build();
    let result = compare_values(
        Some(&Value::string("Apple")),
        CmpOp::Eq,
        Some(&Value::string("aPPLE")),
        &ctx,
    );
    assert_eq!(result.unwrap(), true);
}

#[test]
fn boolean_equality_works_and_relational_fails() {
    let t = Value::Bool(true);
    let f = Value::Bool(false);
    assert_eq!(cmp(&t, CmpOp::Eq, &t), Ok(true));
    assert_eq!(cmp(&t, CmpOp::Eq, &f), Ok(false));
    assert_eq!(cmp(&t, CmpOp::NotEq, &f), Ok(true));
    let err = cmp(&t, CmpOp::Lt, &f).unwrap_err();
    assert_eq!(
        err,
        EvalErrorKind::IllegalOperator {
            op: "<".to_string(),
            type_name: "boolean",
        }
    );
}

#[test]
fn dates_of_the_same_kind_compare_by_instant() {
    let earlier = Value::date(DateKind::DateTime, 1_000);
    let later = Value::date(DateKind::DateTime, 2_000);
    assert_eq!(cmp(&earlier, CmpOp::Lt, &later), Ok(true));
    assert_eq!(cmp(&earlier, CmpOp::Eq, &earlier), Ok(true));
    assert_eq!(cmp(&later, CmpOp::GtEq, &earlier), Ok(true));
}

#[test]
fn date_kind_mismatch_always_fails() {
    let date = Value::date(DateKind::Date, 0);
    let time = Value::date(DateKind::Time, 0);
    let err = cmp(&date, CmpOp::Eq, &time).unwrap_err();
    assert_eq!(
        err,
        EvalErrorKind::DateKindMismatch {
            left: DateKind::Date,
            right: DateKind::Time,
        }
    );
    // The lenient mode never relaxes date-kind mismatches.
    let err = compare_values_lenient(
        Some(&date),
        CmpOp::Eq,
        Some(&time),
        &EvalContext::default(),
    )
    .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::DateKindMismatch { .. }));
}

#[test]
fn unknown_date_kind_names_the_offending_side() {
    let known = Value::date(DateKind::Date, 0);
    let unknown = Value::date(DateKind::Unknown, 0);
    let err = cmp(&unknown, CmpOp::Eq, &known).unwrap_err();
    assert_eq!(
        err,
        EvalErrorKind::UnknownDateKind {
            side: OperandSide::Left
        }
    );
    let err = cmp(&known, CmpOp::Eq, &unknown).unwrap_err();
    assert_eq!(
        err,
        EvalErrorKind::UnknownDateKind {
            side: OperandSide::Right
        }
    );
}

#[test]
fn incompatible_kinds_fail_strictly() {
    let err = cmp(&Value::int(1), CmpOp::Eq, &Value::string("1")).unwrap_err();
    assert_eq!(
        err,
        EvalErrorKind::IncompatibleTypes {
            left: "number".to_string(),
            right: "string".to_string(),
        }
    );
}

#[test]
fn lenient_mode_turns_kind_mismatch_into_not_equal() {
    let ctx = EvalContext::default();
    let n = Value::int(1);
    let s = Value::string("1");
    assert_eq!(
        compare_values_lenient(Some(&n), CmpOp::Eq, Some(&s), &ctx).unwrap(),
        false
    );
    assert_eq!(
        compare_values_lenient(Some(&n), CmpOp::NotEq, Some(&s), &ctx).unwrap(),
        true
    );
    // Relational operators still fail even in lenient mode.
    let err = compare_values_lenient(Some(&n), CmpOp::Lt, Some(&s), &ctx).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::IncompatibleTypes { .. }));
}

#[test]
fn missing_left_with_flag_is_false_for_every_operator() {
    let ctx = EvalContext::default();
    let five = Value::int(5);
    let options = CompareOptions {
        left_missing_is_false: true,
        ..CompareOptions::default()
    };
    for op in ALL_OPS {
        let result = compare_operands(
            Operand::new(None),
            op,
            Operand::from(&five),
            &options,
            &ctx,
        );
        assert_eq!(result.unwrap(), false, "operator {op}");
    }
}

#[test]
fn missing_right_with_flag_is_false() {
    let ctx = EvalContext::default();
    let five = Value::int(5);
    let options = CompareOptions {
        right_missing_is_false: true,
        ..CompareOptions::default()
    };
    let result = compare_operands(
        Operand::from(&five),
        CmpOp::Eq,
        Operand::new(None),
        &options,
        &ctx,
    );
    assert_eq!(result.unwrap(), false);
}

#[test]
fn missing_operand_without_flag_fails_and_blames_its_span() {
    let ctx = EvalContext::default();
    let five = Value::int(5);
    let left_span = Span::new(10, 14);
    let err = compare_operands(
        Operand::new(None).with_span(left_span),
        CmpOp::Eq,
        Operand::from(&five),
        &CompareOptions::default(),
        &ctx,
    )
    .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::MissingValue {
            side: Some(OperandSide::Left)
        }
    );
    assert_eq!(err.span, Some(left_span));
}

#[test]
fn missing_operand_without_span_falls_back_to_default_blamed() {
    let ctx = EvalContext::default();
    let five = Value::int(5);
    let blamed = Span::new(3, 20);
    let options = CompareOptions {
        default_blamed: Some(blamed),
        ..CompareOptions::default()
    };
    let err = compare_operands(
        Operand::from(&five),
        CmpOp::Eq,
        Operand::new(None),
        &options,
        &ctx,
    )
    .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::MissingValue {
            side: Some(OperandSide::Right)
        }
    );
    assert_eq!(err.span, Some(blamed));
}

#[test]
fn surface_operator_token_is_reported() {
    let ctx = EvalContext::default();
    let a = Value::string("a");
    let b = Value::string("b");
    let options = CompareOptions {
        op_symbol: Some("lt"),
        ..CompareOptions::default()
    };
    let err = compare_operands(
        Operand::from(&a),
        CmpOp::Lt,
        Operand::from(&b),
        &options,
        &ctx,
    )
    .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::IllegalOperator {
            op: "lt".to_string(),
            type_name: "string",
        }
    );
}

#[test]
fn incompatible_types_error_notes_operand_spans() {
    let ctx = EvalContext::default();
    let n = Value::int(1);
    let s = Value::string("x");
    let err = compare_operands(
        Operand::from(&n).with_span(Span::new(0, 1)),
        CmpOp::Eq,
        Operand::from(&s).with_span(Span::new(5, 8)),
        &CompareOptions::default(),
        &ctx,
    )
    .unwrap_err();
    let spans: Vec<_> = err.notes.iter().filter_map(|n| n.span).collect();
    assert!(spans.contains(&Span::new(0, 1)));
    assert!(spans.contains(&Span::new(5, 8)));
}

#[test]
fn sequences_are_never_comparable() {
    let a = Value::sequence(vec![Value::int(1)]);
    let b = Value::sequence(vec![Value::int(1)]);
    let err = cmp(&a, CmpOp::Eq, &b).unwrap_err();
    assert!(matches!(err, EvalErrorKind::IncompatibleTypes { .. }));
}
