//! Classifies raw cell values into typed RDF literals.
//!
//! The classification order is fixed: booleans, integers, floats and
//! timestamps keep their cell type; strings are tried as an ISO-8601
//! timestamp, then as a run of digits (integer), then as digits with a single
//! decimal point (double), and otherwise stay strings. A digit run loses its
//! leading zeros (`"007"` becomes `7`) and a leading `-` is not a digit, so
//! `"-5"` stays a string. Only ASCII digits count: other scripts' decimal
//! digits (`"\u{661}\u{662}"`) stay strings.

use crate::consts::{XSD_BOOLEAN, XSD_DATE_TIME, XSD_DOUBLE, XSD_INTEGER, XSD_STRING};
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone,
};
use oxigraph::model::{Literal, NamedNodeRef};
use std::fmt;

/// A raw spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    DateTime(NaiveDateTime),
    String(String),
    /// Any other cell kind (durations, error values), as its display text.
    Other(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns the cell text when the cell is a string that names a resource,
    /// i.e. contains a colon.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            CellValue::String(s) if s.contains(':') => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", double_lexical(*v)),
            CellValue::DateTime(dt) => write!(f, "{}", Timestamp::Naive(*dt)),
            CellValue::String(s) | CellValue::Other(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Naive(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Parses an ISO-8601 date or date-time. A bare date is read as midnight.
    ///
    /// The time follows the date after a `T` or a space and is either
    /// extended (`HH`, `HH:MM`, `HH:MM:SS[.f]`) or basic (`HHMM`,
    /// `HHMMSS[.f]`), optionally followed by `Z` or a `±HH[:MM[:SS]]` offset.
    /// An hour on its own (`2024-03-01T10`) is a valid date-time.
    pub fn parse_iso8601(s: &str) -> Option<Self> {
        if !has_iso_date_prefix(s) {
            return None;
        }
        let date = NaiveDate::parse_from_str(&s[..10], "%Y-%m-%d").ok()?;
        let rest = &s[10..];
        if rest.is_empty() {
            return Some(Timestamp::Naive(date.and_time(NaiveTime::MIN)));
        }
        let rest = rest.strip_prefix('T').or_else(|| rest.strip_prefix(' '))?;
        let (time, offset) = match rest.find(|c: char| matches!(c, 'Z' | '+' | '-')) {
            Some(i) => (&rest[..i], Some(parse_utc_offset(&rest[i..])?)),
            None => (rest, None),
        };
        let naive = date.and_time(parse_time(time)?);
        match offset {
            None => Some(Timestamp::Naive(naive)),
            Some(offset) => offset
                .from_local_datetime(&naive)
                .single()
                .map(Timestamp::Offset),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            Timestamp::Offset(dt) => {
                write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, false))
            }
        }
    }
}

// YYYY-MM-DD
fn has_iso_date_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 10
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit)
}

// HH, HH:MM, HH:MM:SS or the same without separators
fn clock_fields(clock: &str) -> Option<Vec<u32>> {
    let fields = if clock.contains(':') {
        clock.split(':').map(two_digits).collect::<Option<Vec<u32>>>()?
    } else {
        if !clock.is_ascii() || clock.len() % 2 != 0 {
            return None;
        }
        (0..clock.len())
            .step_by(2)
            .map(|i| two_digits(&clock[i..i + 2]))
            .collect::<Option<Vec<u32>>>()?
    };
    (1..=3).contains(&fields.len()).then_some(fields)
}

fn two_digits(s: &str) -> Option<u32> {
    if s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

fn parse_time(time: &str) -> Option<NaiveTime> {
    let (clock, fraction) = match time.find(|c: char| c == '.' || c == ',') {
        Some(i) => (&time[..i], Some(&time[i + 1..])),
        None => (time, None),
    };
    let fields = clock_fields(clock)?;
    let (hour, minute, second) = match fields[..] {
        [h] => (h, 0, 0),
        [h, m] => (h, m, 0),
        [h, m, s] => (h, m, s),
        _ => return None,
    };
    // a fraction only follows seconds
    let nano = match fraction {
        None => 0,
        Some(f) if fields.len() == 3 => fraction_nanos(f)?,
        Some(_) => return None,
    };
    NaiveTime::from_hms_nano_opt(hour, minute, second, nano)
}

fn fraction_nanos(f: &str) -> Option<u32> {
    if f.is_empty() || f.len() > 9 || !f.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: u32 = f.parse().ok()?;
    Some(digits * 10u32.pow(9 - f.len() as u32))
}

fn parse_utc_offset(offset: &str) -> Option<FixedOffset> {
    if offset == "Z" {
        return FixedOffset::east_opt(0);
    }
    let sign = match offset.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let fields = clock_fields(&offset[1..])?;
    let (hours, minutes, seconds) = match fields[..] {
        [h] => (h, 0, 0),
        [h, m] => (h, m, 0),
        [h, m, s] => (h, m, s),
        _ => return None,
    };
    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }
    let total = (hours * 3600 + minutes * 60 + seconds) as i32;
    FixedOffset::east_opt(sign * total)
}

/// The typed value a cell is converted to.
#[derive(Debug, Clone, PartialEq)]
pub enum InferredLiteral {
    Boolean(bool),
    Integer(i64),
    /// A digit run too long for `i64`, in canonical form (no leading zeros).
    WideInteger(String),
    Double(f64),
    DateTime(Timestamp),
    String(String),
}

impl InferredLiteral {
    pub fn datatype(&self) -> NamedNodeRef<'static> {
        match self {
            InferredLiteral::Boolean(_) => XSD_BOOLEAN,
            InferredLiteral::Integer(_) | InferredLiteral::WideInteger(_) => XSD_INTEGER,
            InferredLiteral::Double(_) => XSD_DOUBLE,
            InferredLiteral::DateTime(_) => XSD_DATE_TIME,
            InferredLiteral::String(_) => XSD_STRING,
        }
    }

    pub fn lexical(&self) -> String {
        match self {
            InferredLiteral::Boolean(b) => b.to_string(),
            InferredLiteral::Integer(i) => i.to_string(),
            InferredLiteral::WideInteger(digits) => digits.clone(),
            InferredLiteral::Double(v) => double_lexical(*v),
            InferredLiteral::DateTime(ts) => ts.to_string(),
            InferredLiteral::String(s) => s.clone(),
        }
    }

    pub fn to_literal(&self) -> Literal {
        Literal::new_typed_literal(self.lexical(), self.datatype())
    }
}

impl From<InferredLiteral> for Literal {
    fn from(value: InferredLiteral) -> Self {
        value.to_literal()
    }
}

fn double_lexical(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "INF".to_string()
    } else if v == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        v.to_string()
    }
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Classifies a cell value. Empty cells classify as the empty string; callers
/// skip them before getting here.
pub fn infer_literal(value: &CellValue) -> InferredLiteral {
    match value {
        CellValue::Bool(b) => InferredLiteral::Boolean(*b),
        CellValue::Int(i) => InferredLiteral::Integer(*i),
        CellValue::Float(v) => InferredLiteral::Double(*v),
        CellValue::DateTime(dt) => InferredLiteral::DateTime(Timestamp::Naive(*dt)),
        CellValue::String(s) => infer_from_str(s),
        CellValue::Empty | CellValue::Other(_) => InferredLiteral::String(value.to_string()),
    }
}

pub fn infer_from_str(s: &str) -> InferredLiteral {
    if let Some(ts) = Timestamp::parse_iso8601(s) {
        return InferredLiteral::DateTime(ts);
    }
    if is_ascii_digits(s) {
        return match s.parse::<i64>() {
            Ok(i) => InferredLiteral::Integer(i),
            Err(_) => {
                let trimmed = s.trim_start_matches('0');
                InferredLiteral::WideInteger(trimmed.to_string())
            }
        };
    }
    if is_ascii_digits(&s.replacen('.', "", 1)) {
        if let Ok(v) = s.parse::<f64>() {
            return InferredLiteral::Double(v);
        }
    }
    InferredLiteral::String(s.to_string())
}
