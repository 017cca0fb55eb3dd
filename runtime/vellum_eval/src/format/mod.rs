//! Value formatting contracts.
//!
//! Numbers and date-like values become output text through injected
//! formatters, which a template configuration supplies per evaluation
//! context. A formatter may produce plain text or markup (a number format
//! that renders `1.5E3` with superscript HTML, say); callers that cannot
//! accept markup use the distinct plain-text-only path instead of
//! inspecting the result.
//!
//! The formatters here are the *contracts* plus plain defaults. Concrete
//! locale-aware formatting engines live outside the evaluation core.

mod default;


pub use default::{DefaultBooleanFormat, DefaultDateFormat, DefaultNumberFormat};

use std::fmt;

use vellum_value::{DateValue, MarkupValue, Number};

/// Result of formatting or coercing a value: plain text, or markup tagged
/// with its output format.
#[derive(Clone, Debug, PartialEq)]
pub enum TextOrMarkup {
    Text(String),
    Markup(MarkupValue),
}

impl TextOrMarkup {
    /// Whether this is markup output.
    pub const fn is_markup(&self) -> bool {
        matches!(self, TextOrMarkup::Markup(_))
    }

    /// The plain text, if this is not markup.
    pub fn into_text(self) -> Option<String> {
        match self {
            TextOrMarkup::Text(s) => Some(s),
            TextOrMarkup::Markup(_) => None,
        }
    }
}

/// Failure from an injected formatter, e.g. a value the format cannot
/// express. The coercion engine wraps it into an evaluation error blamed
/// on the coerced expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatError {
    message: String,
}

impl FormatError {
    /// Create an error with a human-readable reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The reason text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FormatError {}

/// Number formatting strategy.
pub trait NumberFormat: Send + Sync {
    /// Format a number; the result may be text or markup.
    fn format(&self, value: &Number) -> Result<TextOrMarkup, FormatError>;

    /// Format a number to plain text, bypassing any markup-producing
    /// behavior of [`NumberFormat::format`].
    fn format_to_plain_text(&self, value: &Number) -> Result<String, FormatError>;
}

/// Date formatting strategy.
pub trait DateFormat: Send + Sync {
    /// Format a date-like value; the result may be text or markup.
    fn format(&self, value: &DateValue) -> Result<TextOrMarkup, FormatError>;

    /// Format a date-like value to plain text, bypassing any
    /// markup-producing behavior of [`DateFormat::format`].
    fn format_to_plain_text(&self, value: &DateValue) -> Result<String, FormatError>;
}

/// Boolean-to-text rule.
///
/// A pluggable, format-aware step: configurations can render booleans as
/// `yes`/`no`, localized words, and so on.
pub trait BooleanFormat: Send + Sync {
    /// Format a boolean as text.
    fn format(&self, value: bool) -> Result<String, FormatError>;
}
