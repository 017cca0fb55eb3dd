//! Markup output values and output formats.
//!
//! A [`MarkupValue`] is structured, format-tagged text: it knows which
//! output format produced it and must never be re-escaped or mixed with
//! text of another format without going through the rules here.
//!
//! A markup value stores either markup text (already escaped) or the plain
//! source text it was built from. Keeping the plain source around is what
//! makes cross-format concatenation possible: a value that still knows its
//! plain source can be re-escaped under another format.
//!
//! Output-format *identity* is `Arc` pointer identity. Two independently
//! constructed format objects are different formats even if they escape
//! identically; use the shared instances ([`HtmlFormat::shared`],
//! [`XmlFormat::shared`]) when identity matters.

mod html;
mod xml;


pub use html::HtmlFormat;
pub use xml::XmlFormat;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::errors::{internal_contract_violation, EvalResult};

/// An output format: the escaping rule associated with one markup kind.
///
/// Implementations must be cheap to call and free of interior mutability;
/// the evaluation core may invoke them from any thread.
pub trait MarkupFormat: Send + Sync {
    /// The format name, used only in diagnostics.
    fn name(&self) -> &str;

    /// Escape plain text into markup of this format.
    fn escape_plain_text(&self, text: &str) -> String;
}

#[derive(Clone)]
enum MarkupContent {
    /// Built from plain text; escaping is deferred until markup text is
    /// actually needed, and the source stays available for re-escaping
    /// under another format.
    PlainText(Arc<str>),
    /// Already-escaped markup. The plain source is gone.
    Markup(Arc<str>),
}

/// Format-tagged markup output.
#[derive(Clone)]
pub struct MarkupValue {
    format: Arc<dyn MarkupFormat>,
    content: MarkupContent,
}

impl MarkupValue {
    /// Create a markup value from plain text. The text is escaped lazily
    /// and remains available via [`MarkupValue::source_plain_text`].
    pub fn from_plain_text(format: Arc<dyn MarkupFormat>, text: impl Into<String>) -> Self {
        MarkupValue {
            format,
            content: MarkupContent::PlainText(Arc::from(text.into())),
        }
    }

    /// Create a markup value from already-escaped markup text.
    pub fn from_markup(format: Arc<dyn MarkupFormat>, markup: impl Into<String>) -> Self {
        MarkupValue {
            format,
            content: MarkupContent::Markup(Arc::from(markup.into())),
        }
    }

    /// The output format this value is tagged with.
    #[inline]
    pub fn format(&self) -> &Arc<dyn MarkupFormat> {
        &self.format
    }

    /// The format name, for diagnostics.
    #[inline]
    pub fn format_name(&self) -> &str {
        self.format.name()
    }

    /// Whether two values share the same output-format identity.
    #[inline]
    pub fn same_format(&self, other: &MarkupValue) -> bool {
        Arc::ptr_eq(&self.format, &other.format)
    }

    /// The plain source text, if this value still knows it.
    ///
    /// `None` means the value was built from markup directly and cannot
    /// degrade to plain text.
    pub fn source_plain_text(&self) -> Option<&str> {
        match &self.content {
            MarkupContent::PlainText(text) => Some(text),
            MarkupContent::Markup(_) => None,
        }
    }

    /// The markup text, escaping the plain source on demand.
    pub fn markup_text(&self) -> Cow<'_, str> {
        match &self.content {
            MarkupContent::PlainText(text) => Cow::Owned(self.format.escape_plain_text(text)),
            MarkupContent::Markup(markup) => Cow::Borrowed(markup),
        }
    }
}

impl fmt::Debug for MarkupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MarkupValue");
        s.field("format", &self.format.name());
        match &self.content {
            MarkupContent::PlainText(text) => s.field("plain_text", text),
            MarkupContent::Markup(markup) => s.field("markup", markup),
        };
        s.finish()
    }
}

impl PartialEq for MarkupValue {
    /// Structural equality for tests and value identity: same format
    /// identity, same content variant, same text.
    fn eq(&self, other: &Self) -> bool {
        if !self.same_format(other) {
            return false;
        }
        match (&self.content, &other.content) {
            (MarkupContent::PlainText(a), MarkupContent::PlainText(b))
            | (MarkupContent::Markup(a), MarkupContent::Markup(b)) => a == b,
            _ => false,
        }
    }
}

/// Operations every output format supports, implemented once over the
/// shared content model.
///
/// This is the object-level half of the output-format service: the
/// [`MarkupFormat`] trait supplies the escaping rule, and these methods
/// supply construction and same-format concatenation on top of it.
pub trait MarkupFormatExt {
    /// Wrap plain text as markup of this format, escaping on output.
    fn from_plain_text_by_escaping(&self, text: &str) -> MarkupValue;

    /// Concatenate two values of *this* format.
    ///
    /// Both operands must be tagged with this exact format; anything else
    /// is a caller bug, surfaced as an internal contract violation. Use
    /// the concatenation resolver for values of possibly-different
    /// formats.
    fn concat(&self, left: &MarkupValue, right: &MarkupValue) -> EvalResult<MarkupValue>;
}

impl MarkupFormatExt for Arc<dyn MarkupFormat> {
    fn from_plain_text_by_escaping(&self, text: &str) -> MarkupValue {
        MarkupValue::from_plain_text(Arc::clone(self), text)
    }

    fn concat(&self, left: &MarkupValue, right: &MarkupValue) -> EvalResult<MarkupValue> {
        if !Arc::ptr_eq(self, &left.format) || !left.same_format(right) {
            return Err(internal_contract_violation(format!(
                "same-format concat called with operands of formats {} and {}; \
                 cross-format joining must go through the concatenation resolver",
                left.format_name(),
                right.format_name(),
            )));
        }
        // Two plain-sourced values stay plain-sourced, so the result can
        // still degrade to plain text later.
        let joined = match (&left.content, &right.content) {
            (MarkupContent::PlainText(a), MarkupContent::PlainText(b)) => {
                MarkupValue::from_plain_text(Arc::clone(self), format!("{a}{b}"))
            }
            _ => MarkupValue::from_markup(
                Arc::clone(self),
                format!("{}{}", left.markup_text(), right.markup_text()),
            ),
        };
        Ok(joined)
    }
}
