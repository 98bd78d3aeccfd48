//! Pairing of a transform with a source, minting independent cursors
//!
//! A [`TransformedSequence`] is a pure factory: construction does no work and
//! validates nothing, and every traversal gets its own fresh cursor over a
//! fresh source cursor. Whether the sequence is re-iterable follows directly
//! from whether the source is (`&source` iterable, or the source `Clone`).

use crate::cursor::TransformedCursor;
use crate::step::{Reducer, Transform};

/// A lazily transformed view of a source sequence.
///
/// Nothing is pulled from the source until a cursor is pulled from; cursors
/// created from the same sequence share no mutable state.
///
/// # Examples
/// ```
/// use xf_iter::{transforms, TransformedSequence};
///
/// let seq = TransformedSequence::new(transforms::map(|x: &i32| x * 10), vec![1, 2, 3]);
///
/// // Borrowing traversals are independent and re-iterable.
/// let first: Vec<i32> = seq.iter().collect();
/// let second: Vec<i32> = seq.iter().collect();
/// assert_eq!(first, vec![10, 20, 30]);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct TransformedSequence<T, S> {
    transform: T,
    source: S,
}

impl<T, S> TransformedSequence<T, S> {
    /// Pair a transform with a source sequence.
    pub fn new(transform: T, source: S) -> Self {
        TransformedSequence { transform, source }
    }

    /// Create a fresh borrowing cursor over the source.
    ///
    /// Each call starts the source from its own beginning; traversals never
    /// affect one another.
    pub fn iter<'a>(&'a self) -> TransformedCursor<<&'a S as IntoIterator>::IntoIter, T::Reducer>
    where
        &'a S: IntoIterator,
        T: Transform<<&'a S as IntoIterator>::Item>,
    {
        self.into_iter()
    }

    /// The underlying source, untransformed.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<T, S> IntoIterator for TransformedSequence<T, S>
where
    S: IntoIterator,
    T: Transform<S::Item>,
{
    type Item = <T::Reducer as Reducer<S::Item>>::Output;
    type IntoIter = TransformedCursor<S::IntoIter, T::Reducer>;

    fn into_iter(self) -> Self::IntoIter {
        TransformedCursor::new(self.source.into_iter(), self.transform.reducer())
    }
}

impl<'a, T, S> IntoIterator for &'a TransformedSequence<T, S>
where
    &'a S: IntoIterator,
    T: Transform<<&'a S as IntoIterator>::Item>,
{
    type Item = <T::Reducer as Reducer<<&'a S as IntoIterator>::Item>>::Output;
    type IntoIter = TransformedCursor<<&'a S as IntoIterator>::IntoIter, T::Reducer>;

    fn into_iter(self) -> Self::IntoIter {
        TransformedCursor::new(self.source.into_iter(), self.transform.reducer())
    }
}

/// Extension trait wrapping any iterable into a [`TransformedSequence`].
///
/// # Examples
/// ```
/// use xf_iter::{transforms, XfIterExt};
///
/// let doubled_evens: Vec<i32> = (1..=5)
///     .transduce(transforms::filter_map(|x: i32| if x % 2 == 0 { Some(x * 2) } else { None }))
///     .into_iter()
///     .collect();
/// assert_eq!(doubled_evens, vec![4, 8]);
/// ```
pub trait XfIterExt: Sized {
    /// Pair this sequence with a transform.
    fn transduce<T>(self, transform: T) -> TransformedSequence<T, Self>;
}

impl<S> XfIterExt for S
where
    S: IntoIterator,
{
    fn transduce<T>(self, transform: T) -> TransformedSequence<T, S> {
        TransformedSequence::new(transform, self)
    }
}
