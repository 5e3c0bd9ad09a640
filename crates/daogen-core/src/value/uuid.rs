// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `uuid::Uuid`, bound as hyphenated text. Sixteen raw bytes decode too.

use uuid::Uuid;

use super::{Decode, DecodeError, Encode, Value, decode_text};

impl Encode for Uuid {
    fn encode(&self) -> Value {
        Value::Text(self.hyphenated().to_string())
    }
}

impl Decode for Uuid {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Bytes(bytes) => Self::from_slice(&bytes).map_err(|e| DecodeError::Invalid {
                target:  "Uuid",
                message: e.to_string()
            }),
            other => decode_text(other, "Uuid", Self::parse_str)
        }
    }
}
