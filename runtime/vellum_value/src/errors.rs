//! Error types for value comparison, coercion, and concatenation.
//!
//! Errors here are structured data: a typed [`EvalErrorKind`] with
//! per-variant fields, the blamed source [`Span`] when one is known, and
//! optional secondary notes. The engines never build message strings; the
//! `Display` impls produce the human-readable line and a diagnostic layer
//! above this crate decides how to render spans and notes.
//!
//! Factory functions (e.g. [`incompatible_types`]) are the construction
//! API; they are `#[cold]` because every one of them sits on a failure
//! path.

use std::fmt;

use vellum_ir::Span;

use crate::date::DateKind;

/// Result of a comparison, coercion, or concatenation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Which operand of a binary operation an error is about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperandSide {
    Left,
    Right,
}

impl OperandSide {
    /// The side name, used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            OperandSide::Left => "left",
            OperandSide::Right => "right",
        }
    }
}

/// Typed error category for the evaluation core.
///
/// Each variant carries the structured data of one failure condition, so
/// callers can match on the kind instead of parsing strings, and the
/// diagnostic layer can attach error codes and render operand descriptions
/// however it likes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// An operand required for comparison or coercion was absent.
    MissingValue {
        /// `Some` when the error is about one side of a comparison.
        side: Option<OperandSide>,
    },

    /// A relational operator was applied to a type that only supports the
    /// equality pair (strings, booleans).
    IllegalOperator {
        /// The surface operator token, e.g. `<` or `lt`.
        op: String,
        type_name: &'static str,
    },

    /// The two operand kinds cannot be compared at all.
    IncompatibleTypes {
        left: String,
        right: String,
    },

    /// A date-like operand's precision tag is unresolved. Never relaxed,
    /// not even by the lenient type-mismatch mode.
    UnknownDateKind {
        side: OperandSide,
    },

    /// Both date-like operands have known precision tags, but different
    /// ones.
    DateKindMismatch {
        left: DateKind,
        right: DateKind,
    },

    /// The arithmetic engine failed to order two numbers.
    NumberComparison {
        detail: String,
    },

    /// A value's kind cannot be turned into text under the requested
    /// policy.
    NotStringCoercible {
        type_name: String,
        /// Whether markup output would have been an acceptable target; the
        /// message tells the user why markup did not save them.
        markup_allowed: bool,
    },

    /// A string was required, but the value's formatter produced markup.
    FormattedToMarkup {
        format: String,
    },

    /// An injected formatter failed.
    CannotFormat {
        what: &'static str,
        detail: String,
    },

    /// Two markup values' output formats could not be reconciled for
    /// concatenation.
    FormatsNotUnifiable {
        left: String,
        right: String,
    },

    /// A collaborator broke a stated contract that the type system cannot
    /// encode. Always a bug in the caller or a strategy, never user error.
    InternalContractViolation {
        detail: String,
    },
}

/// `"a"` or `"an"`, chosen by the first letter of the following word.
fn a_or_an(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue { side: Some(side) } => {
                write!(
                    f,
                    "the {} operand of the comparison was undefined or missing",
                    side.name()
                )
            }
            Self::MissingValue { side: None } => {
                write!(f, "undefined or missing value")
            }
            Self::IllegalOperator { op, type_name } => {
                write!(f, "operator `{op}` cannot be applied to {type_name} values")
            }
            Self::IncompatibleTypes { left, right } => {
                write!(
                    f,
                    "cannot compare {} {left} with {} {right}",
                    a_or_an(left),
                    a_or_an(right)
                )
            }
            Self::UnknownDateKind { side } => {
                write!(
                    f,
                    "the {} operand of the comparison is a date-like value where it is \
                     not known whether it is a date, a time, or a date-time, so it \
                     cannot be compared",
                    side.name()
                )
            }
            Self::DateKindMismatch { left, right } => {
                write!(
                    f,
                    "cannot compare date-like values of different kinds: the left \
                     operand is a {left}, the right operand is a {right}"
                )
            }
            Self::NumberComparison { detail } => {
                write!(f, "unexpected error while comparing two numbers: {detail}")
            }
            Self::NotStringCoercible {
                type_name,
                markup_allowed,
            } => {
                let target = if *markup_allowed {
                    "string or markup"
                } else {
                    "string"
                };
                write!(
                    f,
                    "expected a value convertible to {target} here, but got {} {type_name}",
                    a_or_an(type_name)
                )
            }
            Self::FormattedToMarkup { format } => {
                write!(
                    f,
                    "the value was formatted to convert it to string, but the result \
                     was markup of output format {format}"
                )
            }
            Self::CannotFormat { what, detail } => {
                write!(f, "failed to format {what}: {detail}")
            }
            Self::FormatsNotUnifiable { left, right } => {
                write!(
                    f,
                    "the concatenation's left operand is in {left} format while the \
                     right operand is in {right} format, and conversion to a common \
                     format was not possible"
                )
            }
            Self::InternalContractViolation { detail } => {
                write!(f, "internal contract violation: {detail}")
            }
        }
    }
}

/// Additional context note attached to an error.
///
/// Notes carry secondary information such as a caller-supplied usage hint
/// ("this directive needs a string") or a tip about an alternative coercion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalNote {
    pub message: String,
    pub span: Option<Span>,
}

impl EvalNote {
    /// Create a note with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
        }
    }

    /// Create a note with a message and source location.
    pub fn with_span(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span: Some(span),
        }
    }
}

/// Evaluation error.
///
/// Carries the typed kind, the blamed expression's span when known, and
/// secondary notes. All fields are data; rendering is a caller concern.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source location of the blamed expression.
    pub span: Option<Span>,
    /// Additional context notes providing secondary information.
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    /// Create an error from a structured kind.
    pub fn new(kind: EvalErrorKind) -> Self {
        Self {
            kind,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Attach a blamed source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach a blamed source span if one is known.
    #[must_use]
    pub fn with_span_opt(mut self, span: Option<Span>) -> Self {
        if self.span.is_none() {
            self.span = span;
        }
        self
    }

    /// Add a context note to this error.
    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for EvalError {}

// Comparison errors

/// A required operand was absent.
#[cold]
pub fn missing_value(side: Option<OperandSide>) -> EvalError {
    EvalError::new(EvalErrorKind::MissingValue { side })
}

/// Relational operator on an equality-only type.
#[cold]
pub fn illegal_operator(op: impl Into<String>, type_name: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::IllegalOperator {
        op: op.into(),
        type_name,
    })
}

/// Operand kinds that cannot be compared.
#[cold]
pub fn incompatible_types(left: &str, right: &str) -> EvalError {
    EvalError::new(EvalErrorKind::IncompatibleTypes {
        left: left.to_string(),
        right: right.to_string(),
    })
    .with_note(EvalNote::new(
        "comparison is only defined between two numbers, two strings, two \
         booleans, or two date-like values of the same kind",
    ))
}

/// Date-like operand with an unresolved precision tag.
#[cold]
pub fn unknown_date_kind(side: OperandSide) -> EvalError {
    EvalError::new(EvalErrorKind::UnknownDateKind { side })
}

/// Date-like operands with different precision tags.
#[cold]
pub fn date_kind_mismatch(left: DateKind, right: DateKind) -> EvalError {
    EvalError::new(EvalErrorKind::DateKindMismatch { left, right })
}

/// Arithmetic engine failure, wrapped.
#[cold]
pub fn number_comparison(detail: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::NumberComparison {
        detail: detail.into(),
    })
}

// Coercion errors

/// Value kind that cannot become text under the requested policy.
#[cold]
pub fn not_string_coercible(type_name: &str, markup_allowed: bool) -> EvalError {
    EvalError::new(EvalErrorKind::NotStringCoercible {
        type_name: type_name.to_string(),
        markup_allowed,
    })
}

/// String required, but the formatter produced markup.
#[cold]
pub fn formatted_to_markup(format: &str) -> EvalError {
    EvalError::new(EvalErrorKind::FormattedToMarkup {
        format: format.to_string(),
    })
    .with_note(EvalNote::new(
        "coerce the value to plain text to bypass the markup-producing format",
    ))
}

/// Injected formatter failure.
#[cold]
pub fn cannot_format(what: &'static str, detail: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::CannotFormat {
        what,
        detail: detail.into(),
    })
}

// Concatenation errors

/// Output formats that cannot be reconciled.
#[cold]
pub fn formats_not_unifiable(left: &str, right: &str) -> EvalError {
    EvalError::new(EvalErrorKind::FormatsNotUnifiable {
        left: left.to_string(),
        right: right.to_string(),
    })
}

// Bug-class errors

/// Collaborator contract breach.
#[cold]
pub fn internal_contract_violation(detail: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::InternalContractViolation {
        detail: detail.into(),
    })
}
