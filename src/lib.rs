//! xf-iter - a lazy, pull-based transducer iteration adapter
//!
//! Pairs a composable reducing-function transform with any source sequence
//! and exposes the result through Rust's native pull convention. A transform
//! may consume many inputs before emitting, emit many values per input, or
//! halt the whole traversal early; the pull engine stays lazy and correct
//! under all of them.
//!
//! # Examples
//! ```
//! use xf_iter::{transforms, XfIterExt};
//!
//! // Batching: chunks buffers inputs and flushes the final partial batch.
//! let batches: Vec<Vec<u32>> = (1..=7)
//!     .transduce(transforms::chunks(3))
//!     .into_iter()
//!     .collect();
//! assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
//! ```

pub mod cursor;
pub mod error;
pub mod step;

pub mod sequence;
pub mod transforms;

pub use cursor::TransformedCursor;
pub use error::{XfError, XfResult};
pub use sequence::{TransformedSequence, XfIterExt};
pub use step::{Reducer, Sink, StepOutcome, Transform};
