//! Markup concatenation resolver tests.

use pretty_assertions::assert_eq;

use crate::concat::concat_markup_outputs;
use vellum_ir::Span;
use vellum_value::{EvalErrorKind, HtmlFormat, MarkupValue, XmlFormat};

#[test]
fn same_format_concat_joins_natively() {
    let html = HtmlFormat::shared();
    let a = MarkupValue::from_markup(html.clone(), "<b>a</b>");
    let b = MarkupValue::from_markup(html, "<i>b</i>");
    let joined = concat_markup_outputs(None, &a, &b).unwrap();
    assert_eq!(joined.markup_text(), "<b>a</b><i>b</i>");
    assert!(joined.same_format(&a));
}

#[test]
fn same_format_concat_never_takes_the_plain_text_detour() {
    // Plain-sourced operands of one format stay plain-sourced: native
    // concatenation preserves the source instead of escaping early.
    let html = HtmlFormat::shared();
    let a = MarkupValue::from_plain_text(html.clone(), "a & ");
    let b = MarkupValue::from_plain_text(html, "b");
    let joined = concat_markup_outputs(None, &a, &b).unwrap();
    assert_eq!(joined.source_plain_text(), Some("a & b"));
}

#[test]
fn cross_format_concat_degrades_the_right_operand_first() {
    // The right operand still knows its plain source, so it is re-escaped
    // under the left operand's format: the left format wins.
    let left = MarkupValue::from_markup(HtmlFormat::shared(), "<b>bold</b> ");
    let right = MarkupValue::from_plain_text(XmlFormat::shared(), "a < b");
    let joined = concat_markup_outputs(None, &left, &right).unwrap();
    assert!(joined.same_format(&left));
    assert_eq!(joined.markup_text(), "<b>bold</b> a &lt; b");
}

#[test]
fn left_format_wins_when_both_operands_are_plain_sourced() {
    let left = MarkupValue::from_plain_text(HtmlFormat::shared(), "l'");
    let right = MarkupValue::from_plain_text(XmlFormat::shared(), "r'");
    let joined = concat_markup_outputs(None, &left, &right).unwrap();
    assert!(joined.same_format(&left));
    // HTML escaping (&#39;), not XML (&apos;), applies to both halves.
    assert_eq!(joined.markup_text(), "l&#39;r&#39;");
}

#[test]
fn cross_format_concat_degrades_the_left_operand_when_right_cannot() {
    let left = MarkupValue::from_plain_text(HtmlFormat::shared(), "a < b ");
    let right = MarkupValue::from_markup(XmlFormat::shared(), "<tag/>");
    let joined = concat_markup_outputs(None, &left, &right).unwrap();
    assert!(joined.same_format(&right));
    assert_eq!(joined.markup_text(), "a &lt; b <tag/>");
}

#[test]
fn unrelated_markup_only_operands_fail_naming_both_formats() {
    let left = MarkupValue::from_markup(HtmlFormat::shared(), "<b>a</b>");
    let right = MarkupValue::from_markup(XmlFormat::shared(), "<tag/>");
    let span = Span::new(2, 12);
    let err = concat_markup_outputs(Some(span), &left, &right).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::FormatsNotUnifiable {
            left: "HTML".to_string(),
            right: "XML".to_string(),
        }
    );
    assert_eq!(err.span, Some(span));
}

#[test]
fn concat_with_empty_same_format_value_is_identity() {
    let html = HtmlFormat::shared();
    let v = MarkupValue::from_plain_text(html.clone(), "a & b");
    let empty = MarkupValue::from_plain_text(html, "");
    let joined = concat_markup_outputs(None, &v, &empty).unwrap();
    assert_eq!(joined, v);
    let joined = concat_markup_outputs(None, &empty, &v).unwrap();
    assert_eq!(joined, v);
}
