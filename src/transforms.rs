//! Stock transforms covering the common reshaping of a pull sequence
//!
//! Each constructor returns a small transform value; the value itself holds no
//! traversal state, so one transform can back any number of independent
//! cursors. Per-traversal state lives in the reducer each cursor instantiates.

use crate::step::{Reducer, Sink, StepOutcome, Transform};

/// Create a transform that passes every element through unchanged.
pub fn identity() -> Identity {
    Identity
}

/// Create a transform that applies `f` to each element.
///
/// # Examples
/// ```
/// use xf_iter::{transforms, XfIterExt};
///
/// let out: Vec<i32> = vec![1, 2, 3].transduce(transforms::map(|x: i32| x + 1)).into_iter().collect();
/// assert_eq!(out, vec![2, 3, 4]);
/// ```
pub fn map<I, O, F>(f: F) -> Map<F>
where
    F: FnMut(I) -> O + Clone,
{
    Map { f }
}

/// Create a transform that keeps only elements satisfying `predicate`.
///
/// A rejected element emits nothing; the pull engine keeps consuming the
/// source until something passes or the source ends.
///
/// # Examples
/// ```
/// use xf_iter::{transforms, XfIterExt};
///
/// let evens: Vec<i32> = (1..=6).transduce(transforms::filter(|x: &i32| x % 2 == 0)).into_iter().collect();
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<I, F>(predicate: F) -> Filter<F>
where
    F: FnMut(&I) -> bool + Clone,
{
    Filter { predicate }
}

/// Create a transform that both filters and maps in one step.
pub fn filter_map<I, O, F>(f: F) -> FilterMap<F>
where
    F: FnMut(I) -> Option<O> + Clone,
{
    FilterMap { f }
}

/// Create an expanding transform: each input becomes every element of the
/// iterable `f` returns, in order, before the next input is consumed.
pub fn flat_map<I, U, F>(f: F) -> FlatMap<F>
where
    F: FnMut(I) -> U + Clone,
    U: IntoIterator,
{
    FlatMap { f }
}

/// Create a transform that passes through at most `n` elements, then halts
/// the traversal so the source is not pulled further.
pub fn take(n: usize) -> Take {
    Take { n }
}

/// Create a transform that passes elements through while `predicate` holds,
/// halting the traversal at the first failure.
pub fn take_while<I, F>(predicate: F) -> TakeWhile<F>
where
    F: FnMut(&I) -> bool + Clone,
{
    TakeWhile { predicate }
}

/// Create a batching transform emitting `Vec`s of `size` elements.
///
/// The final partial batch, if any, is flushed when the traversal ends, for
/// both normal exhaustion and an upstream halt.
///
/// # Panics
/// Panics if `size` is zero.
///
/// # Examples
/// ```
/// use xf_iter::{transforms, XfIterExt};
///
/// let batches: Vec<Vec<i32>> = (1..=5).transduce(transforms::chunks(2)).into_iter().collect();
/// assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunks(size: usize) -> Chunks {
    assert!(size > 0, "chunk size must be non-zero");
    Chunks { size }
}

/// Create a transform that drops consecutive duplicate elements.
pub fn dedup() -> Dedup {
    Dedup
}

/// Identity transform; see [`identity`].
#[derive(Debug, Clone, Copy)]
pub struct Identity;

pub struct IdentityReducer;

impl<I> Reducer<I> for IdentityReducer {
    type Output = I;

    fn step(&mut self, sink: &mut Sink<'_, I>, input: I) -> StepOutcome {
        sink.emit(input);
        StepOutcome::Continue
    }
}

impl<I> Transform<I> for Identity {
    type Reducer = IdentityReducer;

    fn reducer(&self) -> IdentityReducer {
        IdentityReducer
    }
}

/// Mapping transform; see [`map`].
#[derive(Debug, Clone)]
pub struct Map<F> {
    f: F,
}

pub struct MapReducer<F> {
    f: F,
}

impl<I, O, F> Reducer<I> for MapReducer<F>
where
    F: FnMut(I) -> O,
{
    type Output = O;

    fn step(&mut self, sink: &mut Sink<'_, O>, input: I) -> StepOutcome {
        sink.emit((self.f)(input));
        StepOutcome::Continue
    }
}

impl<I, O, F> Transform<I> for Map<F>
where
    F: FnMut(I) -> O + Clone,
{
    type Reducer = MapReducer<F>;

    fn reducer(&self) -> MapReducer<F> {
        MapReducer { f: self.f.clone() }
    }
}

/// Filtering transform; see [`filter`].
#[derive(Debug, Clone)]
pub struct Filter<F> {
    predicate: F,
}

pub struct FilterReducer<F> {
    predicate: F,
}

impl<I, F> Reducer<I> for FilterReducer<F>
where
    F: FnMut(&I) -> bool,
{
    type Output = I;

    fn step(&mut self, sink: &mut Sink<'_, I>, input: I) -> StepOutcome {
        if (self.predicate)(&input) {
            sink.emit(input);
        }
        StepOutcome::Continue
    }
}

impl<I, F> Transform<I> for Filter<F>
where
    F: FnMut(&I) -> bool + Clone,
{
    type Reducer = FilterReducer<F>;

    fn reducer(&self) -> FilterReducer<F> {
        FilterReducer {
            predicate: self.predicate.clone(),
        }
    }
}

/// Filter-and-map transform; see [`filter_map`].
#[derive(Debug, Clone)]
pub struct FilterMap<F> {
    f: F,
}

pub struct FilterMapReducer<F> {
    f: F,
}

impl<I, O, F> Reducer<I> for FilterMapReducer<F>
where
    F: FnMut(I) -> Option<O>,
{
    type Output = O;

    fn step(&mut self, sink: &mut Sink<'_, O>, input: I) -> StepOutcome {
        if let Some(mapped) = (self.f)(input) {
            sink.emit(mapped);
        }
        StepOutcome::Continue
    }
}

impl<I, O, F> Transform<I> for FilterMap<F>
where
    F: FnMut(I) -> Option<O> + Clone,
{
    type Reducer = FilterMapReducer<F>;

    fn reducer(&self) -> FilterMapReducer<F> {
        FilterMapReducer { f: self.f.clone() }
    }
}

/// Expanding transform; see [`flat_map`].
#[derive(Debug, Clone)]
pub struct FlatMap<F> {
    f: F,
}

pub struct FlatMapReducer<F> {
    f: F,
}

impl<I, U, F> Reducer<I> for FlatMapReducer<F>
where
    F: FnMut(I) -> U,
    U: IntoIterator,
{
    type Output = U::Item;

    fn step(&mut self, sink: &mut Sink<'_, U::Item>, input: I) -> StepOutcome {
        sink.emit_all((self.f)(input));
        StepOutcome::Continue
    }
}

impl<I, U, F> Transform<I> for FlatMap<F>
where
    F: FnMut(I) -> U + Clone,
    U: IntoIterator,
{
    type Reducer = FlatMapReducer<F>;

    fn reducer(&self) -> FlatMapReducer<F> {
        FlatMapReducer { f: self.f.clone() }
    }
}

/// Truncating transform; see [`take`].
#[derive(Debug, Clone, Copy)]
pub struct Take {
    n: usize,
}

pub struct TakeReducer {
    remaining: usize,
}

impl<I> Reducer<I> for TakeReducer {
    type Output = I;

    fn step(&mut self, sink: &mut Sink<'_, I>, input: I) -> StepOutcome {
        if self.remaining == 0 {
            return StepOutcome::Halt;
        }
        self.remaining -= 1;
        sink.emit(input);
        // Halting on the last accepted element keeps the source from being
        // pulled one extra time.
        if self.remaining == 0 {
            StepOutcome::Halt
        } else {
            StepOutcome::Continue
        }
    }
}

impl<I> Transform<I> for Take {
    type Reducer = TakeReducer;

    fn reducer(&self) -> TakeReducer {
        TakeReducer { remaining: self.n }
    }
}

/// Prefix transform; see [`take_while`].
#[derive(Debug, Clone)]
pub struct TakeWhile<F> {
    predicate: F,
}

pub struct TakeWhileReducer<F> {
    predicate: F,
}

impl<I, F> Reducer<I> for TakeWhileReducer<F>
where
    F: FnMut(&I) -> bool,
{
    type Output = I;

    fn step(&mut self, sink: &mut Sink<'_, I>, input: I) -> StepOutcome {
        if (self.predicate)(&input) {
            sink.emit(input);
            StepOutcome::Continue
        } else {
            StepOutcome::Halt
        }
    }
}

impl<I, F> Transform<I> for TakeWhile<F>
where
    F: FnMut(&I) -> bool + Clone,
{
    type Reducer = TakeWhileReducer<F>;

    fn reducer(&self) -> TakeWhileReducer<F> {
        TakeWhileReducer {
            predicate: self.predicate.clone(),
        }
    }
}

/// Batching transform; see [`chunks`].
#[derive(Debug, Clone, Copy)]
pub struct Chunks {
    size: usize,
}

pub struct ChunksReducer<I> {
    size: usize,
    batch: Vec<I>,
}

impl<I> Reducer<I> for ChunksReducer<I> {
    type Output = Vec<I>;

    fn step(&mut self, sink: &mut Sink<'_, Vec<I>>, input: I) -> StepOutcome {
        self.batch.push(input);
        if self.batch.len() == self.size {
            sink.emit(std::mem::take(&mut self.batch));
        }
        StepOutcome::Continue
    }

    fn complete(&mut self, sink: &mut Sink<'_, Vec<I>>) {
        if !self.batch.is_empty() {
            sink.emit(std::mem::take(&mut self.batch));
        }
    }
}

impl<I> Transform<I> for Chunks {
    type Reducer = ChunksReducer<I>;

    fn reducer(&self) -> ChunksReducer<I> {
        ChunksReducer {
            size: self.size,
            batch: Vec::with_capacity(self.size),
        }
    }
}

/// Consecutive-duplicate-dropping transform; see [`dedup`].
#[derive(Debug, Clone, Copy)]
pub struct Dedup;

pub struct DedupReducer<I> {
    last: Option<I>,
}

impl<I> Reducer<I> for DedupReducer<I>
where
    I: PartialEq + Clone,
{
    type Output = I;

    fn step(&mut self, sink: &mut Sink<'_, I>, input: I) -> StepOutcome {
        if self.last.as_ref() != Some(&input) {
            self.last = Some(input.clone());
            sink.emit(input);
        }
        StepOutcome::Continue
    }
}

impl<I> Transform<I> for Dedup
where
    I: PartialEq + Clone,
{
    type Reducer = DedupReducer<I>;

    fn reducer(&self) -> DedupReducer<I> {
        DedupReducer { last: None }
    }
}
