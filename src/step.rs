//! Reducing-step protocol: the contract between a transform and the pull engine
//!
//! A [`Transform`] is a factory invoked once per cursor to mint a [`Reducer`],
//! the per-traversal step function. Each step call receives the next upstream
//! input together with a [`Sink`] over the cursor's output buffer and may emit
//! zero, one, or many downstream values before deciding whether traversal
//! should continue. This one protocol expresses mapping, filtering, expansion,
//! batching and early termination alike.

use std::collections::VecDeque;

/// Outcome of a single reducing step.
///
/// Returned from every [`Reducer::step`] call. `Continue` keeps the pull loop
/// feeding the reducer; `Halt` requests early termination of the whole
/// traversal, after which the source is never pulled again and the reducer's
/// [`complete`](Reducer::complete) hook runs exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a Halt outcome that is dropped will not stop the traversal"]
pub enum StepOutcome {
    /// Keep pulling from the source
    Continue,
    /// Stop the traversal; no further inputs will be offered
    Halt,
}

impl StepOutcome {
    /// Returns `true` if the step requested early termination.
    #[inline]
    pub fn is_halt(&self) -> bool {
        matches!(self, StepOutcome::Halt)
    }
}

/// Append-only handle over a cursor's output buffer.
///
/// A reducer can only ever add values through a `Sink`; it cannot observe,
/// reorder, or drain what it has already emitted. Values are handed to the
/// consumer in emission order.
pub struct Sink<'a, T> {
    buf: &'a mut VecDeque<T>,
}

impl<'a, T> Sink<'a, T> {
    pub(crate) fn new(buf: &'a mut VecDeque<T>) -> Self {
        Sink { buf }
    }

    /// Emit one value downstream.
    #[inline]
    pub fn emit(&mut self, value: T) {
        self.buf.push_back(value);
    }

    /// Emit every value produced by an iterator, preserving its order.
    #[inline]
    pub fn emit_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.buf.extend(values);
    }
}

/// The instantiated step function driven by a cursor's pull loop.
///
/// `step` is invoked once per upstream input; `complete` is invoked exactly
/// once per cursor, either after the source is exhausted or after a step
/// returned [`StepOutcome::Halt`]. `complete` may still emit; a batching
/// reducer uses it to flush its final partial batch.
pub trait Reducer<I> {
    /// Type of the values this reducer emits downstream.
    type Output;

    /// Accept one upstream input, emitting any number of outputs through
    /// `sink`, and decide whether the traversal continues.
    fn step(&mut self, sink: &mut Sink<'_, Self::Output>, input: I) -> StepOutcome;

    /// Flush any buffered state at the end of the traversal.
    ///
    /// The default implementation emits nothing.
    fn complete(&mut self, sink: &mut Sink<'_, Self::Output>) {
        let _ = sink;
    }
}

/// A composable transform over reducing steps.
///
/// From the core's point of view a transform is opaque and stateless: it is
/// asked exactly once per cursor, at cursor-creation time, for a fresh
/// [`Reducer`] carrying whatever per-traversal state the transform needs.
/// One transform value can therefore back any number of independent cursors.
///
/// # Examples
/// ```
/// use xf_iter::{Reducer, Sink, StepOutcome, Transform};
///
/// // Emits the running total after each input.
/// #[derive(Clone)]
/// struct RunningSum;
///
/// struct RunningSumReducer {
///     total: i64,
/// }
///
/// impl Reducer<i64> for RunningSumReducer {
///     type Output = i64;
///
///     fn step(&mut self, sink: &mut Sink<'_, i64>, input: i64) -> StepOutcome {
///         self.total += input;
///         sink.emit(self.total);
///         StepOutcome::Continue
///     }
/// }
///
/// impl Transform<i64> for RunningSum {
///     type Reducer = RunningSumReducer;
///
///     fn reducer(&self) -> RunningSumReducer {
///         RunningSumReducer { total: 0 }
///     }
/// }
///
/// use xf_iter::XfIterExt;
/// let sums: Vec<i64> = vec![1i64, 2, 3].transduce(RunningSum).into_iter().collect();
/// assert_eq!(sums, vec![1, 3, 6]);
/// ```
pub trait Transform<I> {
    /// The reducer type this transform instantiates.
    type Reducer: Reducer<I>;

    /// Mint a fresh reducer for one traversal.
    fn reducer(&self) -> Self::Reducer;
}
