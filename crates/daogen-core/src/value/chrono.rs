// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `chrono` date and time types, carried as ISO 8601 text.
//!
//! | Type | Text |
//! |------|------|
//! | `NaiveDate` | `2024-05-01` |
//! | `NaiveTime` | `12:30:00.250` |
//! | `NaiveDateTime` | `2024-05-01 12:30:00` (a `T` separator is accepted too) |
//! | `DateTime<Utc>` | `2024-05-01T12:30:00+00:00` (naive text is read as UTC) |

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::{Decode, DecodeError, Encode, Value, decode_text};

impl Encode for NaiveDate {
    fn encode(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl Decode for NaiveDate {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        decode_text(value, "NaiveDate", str::parse::<Self>)
    }
}

impl Encode for NaiveTime {
    fn encode(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl Decode for NaiveTime {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        decode_text(value, "NaiveTime", str::parse::<Self>)
    }
}

impl Encode for NaiveDateTime {
    fn encode(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl Decode for NaiveDateTime {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        decode_text(value, "NaiveDateTime", parse_naive)
    }
}

impl Encode for DateTime<Utc> {
    fn encode(&self) -> Value {
        Value::Text(self.to_rfc3339())
    }
}

impl Decode for DateTime<Utc> {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        decode_text(value, "DateTime<Utc>", |text| {
            DateTime::parse_from_rfc3339(text)
                .map(|at| at.with_timezone(&Utc))
                .or_else(|_| parse_naive(text).map(|naive| naive.and_utc()))
        })
    }
}

fn parse_naive(text: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> DateTime<Utc> {
        DateTime::from_timestamp(1_714_564_800, 0).unwrap()
    }

    #[test]
    fn date_is_iso_text() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(day.encode(), Value::Text("2024-05-01".into()));
        assert_eq!(NaiveDate::decode(Value::Text("2024-05-01".into())), Ok(day));
    }

    #[test]
    fn utc_timestamp_is_rfc3339() {
        assert_eq!(noon().encode(), Value::Text("2024-05-01T12:00:00+00:00".into()));
        assert_eq!(
            DateTime::<Utc>::decode(Value::Text("2024-05-01T14:00:00+02:00".into())),
            Ok(noon())
        );
    }

    #[test]
    fn naive_text_reads_as_utc() {
        assert_eq!(
            DateTime::<Utc>::decode(Value::Text("2024-05-01 12:00:00".into())),
            Ok(noon())
        );
        assert_eq!(
            NaiveDateTime::decode(Value::Text("2024-05-01T12:00:00.5".into())).map(|at| at.and_utc().timestamp()),
            Ok(1_714_564_800)
        );
    }

    #[test]
    fn malformed_text_is_invalid() {
        let err = NaiveDate::decode(Value::Text("May 1st".into())).unwrap_err();
        assert!(matches!(err, DecodeError::Invalid { target: "NaiveDate", .. }));
        assert_eq!(
            NaiveTime::decode(Value::Int(1)),
            Err(DecodeError::Mismatch {
                expected: "NaiveTime",
                found:    "int"
            })
        );
    }
}
