//! The stateful pull engine behind every transformed traversal
//!
//! A [`TransformedCursor`] owns a source iterator, one instantiated
//! [`Reducer`], and an output buffer. Callers only ever see the two-operation
//! pull protocol (`has_next` / `take_next`, or the plain [`Iterator`] impl);
//! internally each pull cycle keeps feeding source elements to the reducer
//! until the buffer gains content, the source runs dry, or the reducer halts.

use std::collections::VecDeque;

use crate::error::{XfError, XfResult};
use crate::step::{Reducer, Sink};

/// Stateful pull cursor applying a reducer to a source iterator.
///
/// Created by [`TransformedSequence`](crate::TransformedSequence); single-owner
/// and single-consumer for its whole lifetime. Once closed, by source
/// exhaustion or by the reducer halting, the source is never pulled again,
/// although values emitted by the reducer's final `complete` call remain
/// drainable.
pub struct TransformedCursor<S, R>
where
    S: Iterator,
    R: Reducer<S::Item>,
{
    source: S,
    reducer: R,
    buf: VecDeque<R::Output>,
    closed: bool,
}

impl<S, R> TransformedCursor<S, R>
where
    S: Iterator,
    R: Reducer<S::Item>,
{
    pub(crate) fn new(source: S, reducer: R) -> Self {
        TransformedCursor {
            source,
            reducer,
            buf: VecDeque::new(),
            closed: false,
        }
    }

    /// Returns `true` if another value is available.
    ///
    /// Triggers at most one pull cycle when the buffer is empty; otherwise it
    /// has no side effects and may be called any number of times.
    pub fn has_next(&mut self) -> bool {
        if !self.buf.is_empty() {
            return true;
        }
        self.pull();
        !self.buf.is_empty()
    }

    /// Takes the next value, or fails with [`XfError::ExhaustedIteration`]
    /// once the source and the buffer are both drained.
    ///
    /// Exhaustion is the expected end-of-sequence signal for callers that do
    /// not probe with [`has_next`](Self::has_next) first, not a fatal error.
    pub fn take_next(&mut self) -> XfResult<R::Output> {
        if let Some(value) = self.buf.pop_front() {
            return Ok(value);
        }
        self.pull();
        self.buf.pop_front().ok_or(XfError::ExhaustedIteration)
    }

    /// The cursor is read-only; removal always fails with
    /// [`XfError::UnsupportedMutation`].
    pub fn remove(&mut self) -> XfResult<()> {
        Err(XfError::UnsupportedMutation)
    }

    /// Whether the traversal has ended (source exhausted or reducer halted).
    ///
    /// A closed cursor may still hold drainable values emitted by the
    /// reducer's `complete` call.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// One pull cycle: feed source elements to the reducer until the buffer
    /// gains content or the traversal ends.
    ///
    /// The loop condition is "buffer empty", not "pulled once": a filtering
    /// reducer may legitimately emit nothing for many consecutive inputs.
    fn pull(&mut self) {
        if self.closed {
            return;
        }
        while self.buf.is_empty() {
            match self.source.next() {
                Some(input) => {
                    let mut sink = Sink::new(&mut self.buf);
                    if self.reducer.step(&mut sink, input).is_halt() {
                        log::trace!("reducer halted, closing cursor");
                        self.close();
                        return;
                    }
                }
                None => {
                    log::trace!("source exhausted, closing cursor");
                    self.close();
                    return;
                }
            }
        }
    }

    /// Close the cursor and run `complete` exactly once.
    ///
    /// Only reachable from `pull`, which never runs again after `closed` is
    /// set, so the exactly-once guarantee holds for both exhaustion and halt.
    fn close(&mut self) {
        self.closed = true;
        let mut sink = Sink::new(&mut self.buf);
        self.reducer.complete(&mut sink);
    }
}

impl<S, R> Iterator for TransformedCursor<S, R>
where
    S: Iterator,
    R: Reducer<S::Item>,
{
    type Item = R::Output;

    fn next(&mut self) -> Option<R::Output> {
        if let Some(value) = self.buf.pop_front() {
            return Some(value);
        }
        self.pull();
        self.buf.pop_front()
    }
}

impl<S, R> std::iter::FusedIterator for TransformedCursor<S, R>
where
    S: Iterator,
    R: Reducer<S::Item>,
{
}
