use std::cell::Cell;
use std::rc::Rc;

use xf_iter::transforms;
use xf_iter::{Reducer, Sink, StepOutcome, Transform, XfIterExt};

/// Source wrapper counting how many elements were actually pulled.
struct Counted<I> {
    inner: I,
    pulls: Rc<Cell<usize>>,
}

impl<I: Iterator> Iterator for Counted<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.pulls.set(self.pulls.get() + 1);
        }
        item
    }
}

fn counted<I: IntoIterator>(source: I) -> (Counted<I::IntoIter>, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    let source = Counted {
        inner: source.into_iter(),
        pulls: Rc::clone(&pulls),
    };
    (source, pulls)
}

/// Transform that accepts one element, halts, and emits a marker from its
/// `complete` hook.
#[derive(Clone)]
struct HaltAfterFirst {
    marker: i32,
}

struct HaltAfterFirstReducer {
    marker: i32,
}

impl Reducer<i32> for HaltAfterFirstReducer {
    type Output = i32;

    fn step(&mut self, sink: &mut Sink<'_, i32>, input: i32) -> StepOutcome {
        sink.emit(input);
        StepOutcome::Halt
    }

    fn complete(&mut self, sink: &mut Sink<'_, i32>) {
        sink.emit(self.marker);
    }
}

impl Transform<i32> for HaltAfterFirst {
    type Reducer = HaltAfterFirstReducer;

    fn reducer(&self) -> HaltAfterFirstReducer {
        HaltAfterFirstReducer {
            marker: self.marker,
        }
    }
}

/// Pass-through transform counting `complete` invocations.
#[derive(Clone)]
struct CompleteCounter {
    completions: Rc<Cell<usize>>,
}

struct CompleteCounterReducer {
    completions: Rc<Cell<usize>>,
}

impl Reducer<i32> for CompleteCounterReducer {
    type Output = i32;

    fn step(&mut self, sink: &mut Sink<'_, i32>, input: i32) -> StepOutcome {
        sink.emit(input);
        StepOutcome::Continue
    }

    fn complete(&mut self, _sink: &mut Sink<'_, i32>) {
        self.completions.set(self.completions.get() + 1);
    }
}

impl Transform<i32> for CompleteCounter {
    type Reducer = CompleteCounterReducer;

    fn reducer(&self) -> CompleteCounterReducer {
        CompleteCounterReducer {
            completions: Rc::clone(&self.completions),
        }
    }
}

/// Pass-through transform that halts after accepting `n` inputs and counts
/// `complete` invocations.
#[derive(Clone)]
struct HaltAfterN {
    n: usize,
    completions: Rc<Cell<usize>>,
}

struct HaltAfterNReducer {
    remaining: usize,
    completions: Rc<Cell<usize>>,
}

impl Reducer<i32> for HaltAfterNReducer {
    type Output = i32;

    fn step(&mut self, sink: &mut Sink<'_, i32>, input: i32) -> StepOutcome {
        sink.emit(input);
        self.remaining -= 1;
        if self.remaining == 0 {
            StepOutcome::Halt
        } else {
            StepOutcome::Continue
        }
    }

    fn complete(&mut self, _sink: &mut Sink<'_, i32>) {
        self.completions.set(self.completions.get() + 1);
    }
}

impl Transform<i32> for HaltAfterN {
    type Reducer = HaltAfterNReducer;

    fn reducer(&self) -> HaltAfterNReducer {
        HaltAfterNReducer {
            remaining: self.n,
            completions: Rc::clone(&self.completions),
        }
    }
}

#[test]
fn test_halt_then_complete_appends_marker() {
    let (source, pulls) = counted(vec![1, 2, 3]);
    let result: Vec<i32> = source
        .transduce(HaltAfterFirst { marker: 99 })
        .into_iter()
        .collect();

    assert_eq!(result, vec![1, 99]);
    // The 2nd and 3rd elements were never consumed.
    assert_eq!(pulls.get(), 1);
}

#[test]
fn test_take_stops_pulling_the_source() {
    let (source, pulls) = counted(0..1000);
    let result: Vec<i32> = source.transduce(transforms::take(3)).into_iter().collect();

    assert_eq!(result, vec![0, 1, 2]);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_take_while_pulls_one_past_the_prefix() {
    let (source, pulls) = counted(vec![1, 2, 3, 100, 4, 5]);
    let result: Vec<i32> = source
        .transduce(transforms::take_while(|x: &i32| *x < 10))
        .into_iter()
        .collect();

    assert_eq!(result, vec![1, 2, 3]);
    // The failing element must be observed, nothing after it may be.
    assert_eq!(pulls.get(), 4);
}

#[test]
fn test_complete_invoked_once_on_exhaustion() {
    let completions = Rc::new(Cell::new(0));
    let transform = CompleteCounter {
        completions: Rc::clone(&completions),
    };

    let mut cursor = vec![1, 2, 3].transduce(transform).into_iter();
    assert_eq!(cursor.by_ref().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(completions.get(), 1);

    // Further probing after close never re-runs complete.
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);
    assert_eq!(completions.get(), 1);
}

#[test]
fn test_complete_invoked_once_on_halt() {
    let completions = Rc::new(Cell::new(0));
    let transform = HaltAfterN {
        n: 2,
        completions: Rc::clone(&completions),
    };

    let mut cursor = (0..100).transduce(transform).into_iter();
    assert_eq!(cursor.by_ref().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(completions.get(), 1);

    // Further probing after the halt never re-runs complete.
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);
    assert_eq!(completions.get(), 1);
}

#[test]
fn test_halted_cursor_drains_buffer_without_new_pulls() {
    let (source, pulls) = counted(vec![10, 20, 30]);
    let mut cursor = source.transduce(HaltAfterFirst { marker: -1 }).into_iter();

    assert_eq!(cursor.take_next(), Ok(10));
    assert!(cursor.is_closed());
    let pulls_at_close = pulls.get();

    // The marker emitted by complete is still deliverable, with no further
    // source activity.
    assert_eq!(cursor.take_next(), Ok(-1));
    assert!(!cursor.has_next());
    assert_eq!(pulls.get(), pulls_at_close);
}

#[test]
fn test_complete_runs_once_per_cursor_of_a_sequence() {
    let completions = Rc::new(Cell::new(0));
    let transform = CompleteCounter {
        completions: Rc::clone(&completions),
    };
    let seq = vec![1, 2].transduce(transform);

    // Each traversal instantiates its own reducer; the shared counter sees
    // one completion per cursor.
    let first: Vec<i32> = seq.clone().into_iter().collect();
    let second: Vec<i32> = seq.into_iter().collect();
    assert_eq!(first, vec![1, 2]);
    assert_eq!(second, vec![1, 2]);
    assert_eq!(completions.get(), 2);
}
