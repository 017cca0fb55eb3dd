//! Engine tests.
//!
//! Leaf modules (arithmetic, collation, formats) carry their own inline
//! tests; the engine-level behavior lives here.

mod compare_tests;
mod concat_tests;

use std::cmp::Ordering;
use std::sync::Arc;

use crate::collate::Collator;
use crate::context::EvalContext;
use crate::format::{FormatError, NumberFormat, TextOrMarkup};
use vellum_value::{HtmlFormat, MarkupValue, Number};

/// A collator that folds ASCII case, for exercising locale-sensitive
/// string equality.
pub(crate) struct CaseFoldCollator;

impl Collator for CaseFoldCollator {
    fn compare_strings(&self, a: &str, b: &str) -> Ordering {
        a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
    }
}

/// A number format that renders into HTML markup, for exercising the
/// markup-producing formatter paths.
pub(crate) struct HtmlNumberFormat;

impl NumberFormat for HtmlNumberFormat {
    fn format(&self, value: &Number) -> Result<TextOrMarkup, FormatError> {
        Ok(TextOrMarkup::Markup(MarkupValue::from_markup(
            HtmlFormat::shared(),
            format!("<b>{value}</b>"),
        )))
    }

    fn format_to_plain_text(&self, value: &Number) -> Result<String, FormatError> {
        Ok(value.to_string())
    }
}

/// A context whose number formatter produces markup.
pub(crate) fn markup_number_ctx() -> EvalContext {
    EvalContext::builder()
        .with_number_format(Arc::new(HtmlNumberFormat))
        .build()
}
