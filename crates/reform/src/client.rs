//! The database client contract.
//!
//! The querier builds SQL text and argument lists; a [Client] runs them.  Anything which can execute a statement with
//! positional arguments can be a client.  See [crate::sqlite] for the rusqlite implementation.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::record::BoxError;
use crate::value::Value;

/// Result of a statement which returns no rows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecResult {
    pub rows_affected: u64,

    /// The id generated by the last insert, for drivers which report it.
    pub last_insert_id: Option<i64>,
}

/// A forward-only cursor over query results.
///
/// Dropping it releases whatever the client holds for it.
pub trait Rows {
    fn columns(&self) -> Vec<String>;

    /// Get the next row, or `None` at the end.
    fn fetch(&mut self) -> Result<Option<Vec<Value>>, BoxError>;
}

pub trait Client {
    fn exec(&self, ctx: &Context, query: &str, args: &[Value]) -> Result<ExecResult, BoxError>;

    fn query<'a>(
        &'a self,
        ctx: &Context,
        query: &str,
        args: &[Value],
    ) -> Result<Box<dyn Rows + 'a>, BoxError>;

    /// Run a query and get its first row, if any.
    fn query_row(
        &self,
        ctx: &Context,
        query: &str,
        args: &[Value],
    ) -> Result<Option<Vec<Value>>, BoxError> {
        self.query(ctx, query, args)?.fetch()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ContextError {
    #[error("context cancelled")]
    Cancelled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Deadline and cancellation for database calls.
///
/// The querier passes its context to every client call.  It never adds a timeout of its own and never retries when
/// the context says stop.
#[derive(Clone, Debug, Default)]
pub struct Context {
    deadline: Option<Instant>,
    /// Ours and every parent's.
    cancelled: Vec<Arc<AtomicBool>>,
}

/// Cancels the contexts it was created with.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl Context {
    /// A context which never expires.
    pub fn background() -> Context {
        Default::default()
    }

    /// Set the deadline.  An earlier existing deadline wins.
    pub fn with_deadline(mut self, deadline: Instant) -> Context {
        self.deadline = Some(match self.deadline {
            Some(d) if d < deadline => d,
            _ => deadline,
        });
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Context {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Get a cancellable copy of this context, and the handle to cancel it.
    ///
    /// Cancelling any context this one was derived from still cancels it.
    pub fn with_cancel(mut self) -> (Context, CancelHandle) {
        let flag = Arc::new(AtomicBool::new(false));
        self.cancelled.push(flag.clone());
        (self, CancelHandle { flag })
    }

    pub fn get_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline, if there is one.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Fail if the context was cancelled or its deadline passed.
    pub fn check(&self) -> Result<(), ContextError> {
        if self.cancelled.iter().any(|f| f.load(Ordering::Acquire)) {
            return Err(ContextError::Cancelled);
        }

        match self.deadline {
            Some(d) if Instant::now() >= d => Err(ContextError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }
}
