//! Plain default formatters.
//!
//! These render the representation-preserving plain text a template gets
//! when no explicit format is configured. They never produce markup, so
//! their plain-text path and their normal path coincide.

use vellum_value::{DateKind, DateValue, Number};

use super::{BooleanFormat, DateFormat, FormatError, NumberFormat, TextOrMarkup};

/// Default number format: decimal notation, no grouping, integral floats
/// without a fraction part, decimals normalized (no trailing zeros).
pub struct DefaultNumberFormat;

impl DefaultNumberFormat {
    fn render(value: &Number) -> String {
        match value {
            Number::Int(n) => n.to_string(),
            Number::Float(n) => n.to_string(),
            Number::Decimal(d) => d.normalize().to_string(),
        }
    }
}

impl NumberFormat for DefaultNumberFormat {
    fn format(&self, value: &Number) -> Result<TextOrMarkup, FormatError> {
        Ok(TextOrMarkup::Text(Self::render(value)))
    }

    fn format_to_plain_text(&self, value: &Number) -> Result<String, FormatError> {
        Ok(Self::render(value))
    }
}

/// Default date format: ISO-style rendering per precision kind, UTC.
///
/// A value of unknown kind cannot be formatted at all: there is no way to
/// decide which fields of the instant are meaningful.
pub struct DefaultDateFormat;

impl DefaultDateFormat {
    fn render(value: &DateValue) -> Result<String, FormatError> {
        let millis = value.instant_millis();
        let days = millis.div_euclid(86_400_000);
        let ms_of_day = millis.rem_euclid(86_400_000);
        let secs = ms_of_day / 1000;
        let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
        let (year, month, day) = civil_from_days(days);
        match value.kind() {
            DateKind::Date => Ok(format!("{year:04}-{month:02}-{day:02}")),
            DateKind::Time => Ok(format!("{h:02}:{m:02}:{s:02}")),
            DateKind::DateTime => Ok(format!(
                "{year:04}-{month:02}-{day:02} {h:02}:{m:02}:{s:02}"
            )),
            DateKind::Unknown => Err(FormatError::new(
                "cannot format a date-like value of unknown kind; specify whether it \
                 is a date, a time, or a date-time",
            )),
        }
    }
}

/// Days since the epoch to civil (year, month, day), proleptic Gregorian.
/// Howard Hinnant's `civil_from_days` algorithm.
fn civil_from_days(z: i64) -> (i64, i64, i64) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    (if m <= 2 { y + 1 } else { y }, m, d)
}

impl DateFormat for DefaultDateFormat {
    fn format(&self, value: &DateValue) -> Result<TextOrMarkup, FormatError> {
        Self::render(value).map(TextOrMarkup::Text)
    }

    fn format_to_plain_text(&self, value: &DateValue) -> Result<String, FormatError> {
        Self::render(value)
    }
}

/// Default boolean rule: `true`/`false`.
pub struct DefaultBooleanFormat;

impl BooleanFormat for DefaultBooleanFormat {
    fn format(&self, value: bool) -> Result<String, FormatError> {
        Ok(if value { "true" } else { "false" }.to_string())
    }
}
