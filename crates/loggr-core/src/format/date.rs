//! Timestamp layouts
//!
//! Layouts are chrono strftime strings. Layouts written against the reference
//! date `Mon Jan 2 15:04:05 MST 2006` can be translated with
//! [`DateFormat::from_reference_layout`].

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};

use crate::error::{LoggrError, LoggrResult};

/// Default layout, renders as `YYYY-MM-DD HH:MM:SS`
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reference-date tokens and their strftime equivalents, longest first
/// within each shared prefix.
///
/// The `Z07...` offsets render numerically like `-07...`; UTC prints
/// `+00:00`, not `Z`.
const REFERENCE_TOKENS: &[(&str, &str)] = &[
    ("January", "%B"),
    ("Jan", "%b"),
    ("Monday", "%A"),
    ("Mon", "%a"),
    ("MST", "%Z"),
    ("2006", "%Y"),
    ("002", "%j"),
    ("01", "%m"),
    ("02", "%d"),
    ("03", "%I"),
    ("04", "%M"),
    ("05", "%S"),
    ("06", "%y"),
    ("15", "%H"),
    ("_2", "%e"),
    ("1", "%-m"),
    ("2", "%-d"),
    ("3", "%-I"),
    ("4", "%-M"),
    ("5", "%-S"),
    ("PM", "%p"),
    ("pm", "%P"),
    ("Z07:00:00", "%::z"),
    ("Z07:00", "%:z"),
    ("Z0700", "%z"),
    ("Z07", "%:::z"),
    ("-07:00:00", "%::z"),
    ("-07:00", "%:z"),
    ("-0700", "%z"),
    ("-07", "%:::z"),
];

/// A validated timestamp layout
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use loggr_core::format::DateFormat;
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
/// assert_eq!(DateFormat::default().render(&at), "2024-03-09 07:05:01");
///
/// let reference = DateFormat::from_reference_layout("02/01/2006 15:04").unwrap();
/// assert_eq!(reference.render(&at), "09/03/2024 07:05");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    layout: String,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            layout: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl DateFormat {
    /// Validate a strftime layout
    pub fn parse(layout: &str) -> LoggrResult<Self> {
        if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
            return Err(LoggrError::invalid_date_format(layout));
        }
        Ok(Self {
            layout: layout.to_string(),
        })
    }

    /// Translate and validate a reference-date layout (`2006-01-02 15:04:05`)
    pub fn from_reference_layout(layout: &str) -> LoggrResult<Self> {
        Self::parse(&translate_reference_layout(layout))
    }

    /// The strftime layout
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Render a timestamp with this layout
    pub fn render<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let mut out = String::new();
        if write!(out, "{}", at.format(&self.layout)).is_err() {
            // Validated layouts can still miss fields for exotic zones
            out.clear();
            let _ = write!(out, "{}", at.format(DEFAULT_DATE_FORMAT));
        }
        out
    }

    /// Render the current local time
    pub fn render_now(&self) -> String {
        self.render(&Local::now())
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.layout)
    }
}

/// Translate a reference-date layout into strftime
pub fn translate_reference_layout(layout: &str) -> String {
    let mut out = String::with_capacity(layout.len() * 2);
    let mut rest = layout;

    'outer: while let Some(c) = rest.chars().next() {
        if let Some((strftime, len)) = fractional_seconds(rest) {
            out.push_str(strftime);
            rest = &rest[len..];
            continue;
        }
        for (token, strftime) in REFERENCE_TOKENS {
            if rest.starts_with(token) {
                out.push_str(strftime);
                rest = &rest[token.len()..];
                continue 'outer;
            }
        }
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// `.000`, `.000000` or `.000000000` (`9`s also accepted) at the start of `rest`
fn fractional_seconds(rest: &str) -> Option<(&'static str, usize)> {
    let bytes = rest.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'.' {
        return None;
    }
    let digit = bytes[1];
    if digit != b'0' && digit != b'9' {
        return None;
    }
    let run = bytes[1..].iter().take_while(|b| **b == digit).count();
    if bytes.get(1 + run).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    let strftime = match run {
        3 => "%.3f",
        6 => "%.6f",
        9 => "%.9f",
        _ => return None,
    };
    Some((strftime, 1 + run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike, Utc};

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 17, 5, 1).unwrap()
    }

    #[test]
    fn test_default_layout() {
        let format = DateFormat::default();
        assert_eq!(format.layout(), DEFAULT_DATE_FORMAT);
        assert_eq!(format.render(&sample()), "2024-03-09 17:05:01");
    }

    #[test]
    fn test_custom_strftime_layout() {
        let format = DateFormat::parse("%d.%m.%Y %H:%M").unwrap();
        assert_eq!(format.render(&sample()), "09.03.2024 17:05");
    }

    #[test]
    fn test_invalid_layout_rejected() {
        assert!(matches!(
            DateFormat::parse("%Y-%Q"),
            Err(LoggrError::InvalidDateFormat { .. })
        ));
    }

    #[test]
    fn test_reference_default_layout() {
        assert_eq!(
            translate_reference_layout("2006-01-02 15:04:05"),
            DEFAULT_DATE_FORMAT
        );
    }

    #[test]
    fn test_reference_names_and_meridiem() {
        let format = DateFormat::from_reference_layout("Mon Jan _2 3:04PM 2006").unwrap();
        assert_eq!(format.render(&sample()), "Sat Mar  9 5:05PM 2024");

        let format = DateFormat::from_reference_layout("Monday, January 2").unwrap();
        assert_eq!(format.render(&sample()), "Saturday, March 9");
    }

    #[test]
    fn test_reference_fraction_and_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = offset
            .with_ymd_and_hms(2024, 3, 9, 17, 5, 1)
            .unwrap()
            .with_nanosecond(250_000_000)
            .unwrap();
        let format = DateFormat::from_reference_layout("15:04:05.000 -07:00").unwrap();
        assert_eq!(format.render(&at), "17:05:01.250 +02:00");
    }

    #[test]
    fn test_reference_offset_widths() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = offset.with_ymd_and_hms(2024, 3, 9, 17, 5, 1).unwrap();

        assert_eq!(translate_reference_layout("15:04 -07"), "%H:%M %:::z");
        assert_eq!(translate_reference_layout("15:04 Z07"), "%H:%M %:::z");

        let cases = [
            ("15:04 -07", "17:05 +02"),
            ("15:04 Z07", "17:05 +02"),
            ("15:04 -0700", "17:05 +0200"),
            ("15:04 Z0700", "17:05 +0200"),
            ("15:04 -07:00:00", "17:05 +02:00:00"),
            ("15:04 Z07:00:00", "17:05 +02:00:00"),
        ];
        for (layout, expected) in cases {
            let format = DateFormat::from_reference_layout(layout).unwrap();
            assert_eq!(format.render(&at), expected, "layout {}", layout);
        }
    }

    #[test]
    fn test_reference_escapes_percent() {
        assert_eq!(translate_reference_layout("2006%"), "%Y%%");
    }

    #[test]
    fn test_odd_fraction_length_is_literal() {
        assert_eq!(translate_reference_layout("05.00"), "%S.00");
    }
}
