//! Date-like values.

use std::fmt;

/// Precision tag of a date-like value.
///
/// A date-like value can carry a date (no time part), a time of day, or
/// both. `Unknown` means the producer could not tell, typically a value
/// wrapped from a host object with no precision information. Unknown-kind
/// values can be carried around and output with an explicit format, but
/// they can never be compared: there is no way to know which fields are
/// meaningful.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DateKind {
    /// Calendar date, no time part.
    Date,
    /// Time of day, no date part.
    Time,
    /// Full date and time.
    DateTime,
    /// Precision not known.
    Unknown,
}

impl DateKind {
    /// The user-facing kind name, used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            DateKind::Date => "date",
            DateKind::Time => "time",
            DateKind::DateTime => "date-time",
            DateKind::Unknown => "unknown",
        }
    }

    /// Whether the precision is known.
    pub const fn is_known(self) -> bool {
        !matches!(self, DateKind::Unknown)
    }
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Date-like value: a precision tag plus an instant.
///
/// The instant is milliseconds since the Unix epoch, UTC. For `Time` values
/// only the time-of-day part of the instant is meaningful; the comparison
/// engine still compares raw instants, which is well-defined because two
/// values are only ever compared when their kinds match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateValue {
    kind: DateKind,
    instant: i64,
}

impl DateValue {
    /// Create a date-like value from a kind and an epoch-millisecond
    /// instant.
    #[inline]
    pub const fn new(kind: DateKind, instant: i64) -> Self {
        DateValue { kind, instant }
    }

    /// The precision tag.
    #[inline]
    pub const fn kind(&self) -> DateKind {
        self.kind
    }

    /// Milliseconds since the Unix epoch, UTC.
    #[inline]
    pub const fn instant_millis(&self) -> i64 {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(DateKind::Date.name(), "date");
        assert_eq!(DateKind::Time.name(), "time");
        assert_eq!(DateKind::DateTime.name(), "date-time");
        assert_eq!(DateKind::Unknown.name(), "unknown");
    }

    #[test]
    fn known_kinds() {
        assert!(DateKind::Date.is_known());
        assert!(DateKind::Time.is_known());
        assert!(DateKind::DateTime.is_known());
        assert!(!DateKind::Unknown.is_known());
    }

    #[test]
    fn accessors() {
        let d = DateValue::new(DateKind::DateTime, 1_000);
        assert_eq!(d.kind(), DateKind::DateTime);
        assert_eq!(d.instant_millis(), 1_000);
    }
}
