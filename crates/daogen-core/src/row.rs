// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Positional result rows.

use crate::value::{Decode, DecodeError, Value};

/// One result row, columns in `SELECT` order.
///
/// Generated `from_row` functions read columns by index in the same order as
/// the DAO's `COLUMNS` constant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<Value>
}

impl Row {
    /// Create a row from column values.
    pub const fn new(values: Vec<Value>) -> Self {
        Self {
            values
        }
    }

    /// Decode the column at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MissingColumn`] when the row is shorter than
    /// `index + 1`, or the decode error of `T` otherwise.
    pub fn get<T: Decode>(&self, index: usize) -> Result<T, DecodeError> {
        let value = self
            .values
            .get(index)
            .ok_or(DecodeError::MissingColumn {
                index,
                len: self.values.len()
            })?;
        T::decode(value.clone())
    }

    /// Number of columns.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Check for a row without columns.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw column values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consume the row, returning its values.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}
