// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory driver for testing generated DAOs.
//!
//! [`MockPool`] records every statement with its arguments and whether it
//! ran inside a transaction, answers queries from a queue of canned row
//! sets, and can be told to fail individual statements or transaction
//! steps.
//!
//! ```rust,ignore
//! let pool = MockPool::new();
//! pool.push_rows(vec![Row::new(vec![Value::Int(1), Value::Text("ada".into())])]);
//!
//! let dao = UserDao::new(pool.clone());
//! let user = dao.find_by_pk(None, &1).await?;
//!
//! assert_eq!(pool.statements()[0].sql, "SELECT id, name FROM users WHERE id = $1");
//! ```

use std::{
    collections::VecDeque,
    fmt,
    marker::PhantomData,
    sync::{Arc, Mutex, MutexGuard, PoisonError}
};

use crate::{
    dialect::{Dialect, Postgres},
    executor::{Executor, Pool, Transaction},
    row::Row,
    value::{DecodeError, Value}
};

/// Error produced by the mock driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockError(String);

impl MockError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Error message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for MockError {}

impl From<DecodeError> for MockError {
    fn from(err: DecodeError) -> Self {
        Self(err.to_string())
    }
}

/// A statement seen by the mock driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// SQL text.
    pub sql:            String,
    /// Bound arguments.
    pub args:           Vec<Value>,
    /// Whether the statement ran on a transaction handle.
    pub in_transaction: bool
}

/// Transaction lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Transaction started.
    Begin,
    /// Transaction committed.
    Commit,
    /// Transaction rolled back.
    Rollback
}

#[derive(Debug, Default)]
struct MockState {
    statements:    Vec<Statement>,
    events:        Vec<Event>,
    rows:          VecDeque<Vec<Row>>,
    fail_at:       Vec<(usize, MockError)>,
    fail_begin:    Option<MockError>,
    fail_commit:   Option<MockError>,
    fail_rollback: Option<MockError>
}

/// Recording pool for dialect `D`.
///
/// Clones share state, so a test can keep one clone for inspection and
/// hand another to the DAO.
pub struct MockPool<D = Postgres> {
    state:    Arc<Mutex<MockState>>,
    _dialect: PhantomData<fn() -> D>
}

impl MockPool {
    /// Create a PostgreSQL mock pool.
    pub fn new() -> Self {
        Self::for_dialect()
    }
}

impl Default for MockPool {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for MockPool<D> {
    fn clone(&self) -> Self {
        Self {
            state:    Arc::clone(&self.state),
            _dialect: PhantomData
        }
    }
}

impl<D> fmt::Debug for MockPool<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockPool").field("state", &*lock(&self.state)).finish()
    }
}

impl<D> MockPool<D> {
    /// Create a mock pool for any dialect.
    pub fn for_dialect() -> Self {
        Self {
            state:    Arc::default(),
            _dialect: PhantomData
        }
    }

    /// Queue the result set of the next query.
    pub fn push_rows(&self, rows: Vec<Row>) {
        lock(&self.state).rows.push_back(rows);
    }

    /// Fail the statement with the given zero-based position in the log.
    pub fn fail_statement(&self, index: usize, message: &str) {
        lock(&self.state).fail_at.push((index, MockError::new(message)));
    }

    /// Fail the next `begin`.
    pub fn fail_begin(&self, message: &str) {
        lock(&self.state).fail_begin = Some(MockError::new(message));
    }

    /// Fail the next `commit`.
    pub fn fail_commit(&self, message: &str) {
        lock(&self.state).fail_commit = Some(MockError::new(message));
    }

    /// Fail the next `rollback`.
    pub fn fail_rollback(&self, message: &str) {
        lock(&self.state).fail_rollback = Some(MockError::new(message));
    }

    /// Statements executed so far.
    pub fn statements(&self) -> Vec<Statement> {
        lock(&self.state).statements.clone()
    }

    /// Transaction events recorded so far.
    pub fn events(&self) -> Vec<Event> {
        lock(&self.state).events.clone()
    }
}

fn lock(state: &Mutex<MockState>) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Connection or transaction handle of a [`MockPool`].
#[derive(Debug)]
pub struct MockConnection {
    state:          Arc<Mutex<MockState>>,
    in_transaction: bool
}

impl MockConnection {
    fn record(&self, sql: &str, args: Vec<Value>) -> Result<(), MockError> {
        let mut state = lock(&self.state);
        let index = state.statements.len();
        state.statements.push(Statement {
            sql: sql.to_owned(),
            args,
            in_transaction: self.in_transaction
        });
        match state.fail_at.iter().position(|(at, _)| *at == index) {
            Some(pos) => Err(state.fail_at.remove(pos).1),
            None => Ok(())
        }
    }

    fn next_rows(&self) -> Vec<Row> {
        lock(&self.state).rows.pop_front().unwrap_or_default()
    }

    fn finish(self, event: Event) -> Result<(), MockError> {
        let mut state = lock(&self.state);
        let failure = match event {
            Event::Commit => state.fail_commit.take(),
            Event::Rollback => state.fail_rollback.take(),
            Event::Begin => None
        };
        match failure {
            Some(err) => Err(err),
            None => {
                state.events.push(event);
                Ok(())
            }
        }
    }
}

impl Executor for MockConnection {
    type Error = MockError;

    async fn execute(&mut self, sql: &str, args: Vec<Value>) -> Result<u64, Self::Error> {
        self.record(sql, args)?;
        Ok(1)
    }

    async fn fetch_all(&mut self, sql: &str, args: Vec<Value>) -> Result<Vec<Row>, Self::Error> {
        self.record(sql, args)?;
        Ok(self.next_rows())
    }

    async fn fetch_optional(
        &mut self,
        sql: &str,
        args: Vec<Value>
    ) -> Result<Option<Row>, Self::Error> {
        self.record(sql, args)?;
        Ok(self.next_rows().into_iter().next())
    }
}

impl Transaction for MockConnection {
    async fn commit(self) -> Result<(), Self::Error> {
        self.finish(Event::Commit)
    }

    async fn rollback(self) -> Result<(), Self::Error> {
        self.finish(Event::Rollback)
    }
}

impl<D: Dialect> Pool for MockPool<D> {
    type Dialect = D;
    type Error = MockError;
    type Connection = MockConnection;
    type Tx = MockConnection;

    async fn acquire(&self) -> Result<Self::Connection, Self::Error> {
        Ok(MockConnection {
            state:          Arc::clone(&self.state),
            in_transaction: false
        })
    }

    async fn begin(&self) -> Result<Self::Tx, Self::Error> {
        let mut state = lock(&self.state);
        if let Some(err) = state.fail_begin.take() {
            return Err(err);
        }
        state.events.push(Event::Begin);
        Ok(MockConnection {
            state:          Arc::clone(&self.state),
            in_transaction: true
        })
    }
}
