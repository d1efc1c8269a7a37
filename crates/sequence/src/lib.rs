//! Sequence values for the cyclo runtime.
//!
//! A [`Sequence`] is an owned, resizable buffer that is either bounded or
//! cyclic. Bounded sequences clamp out-of-range slice bounds; cyclic
//! sequences interpret every index modulo their length, so slices may wrap
//! across the end of the buffer or traverse it more than once.

/// Error types for sequence operations.
pub mod error;
/// Index normalization for bounded and cyclic access.
pub mod index;
/// The sequence value type.
pub mod sequence;

pub use error::{Result, SequenceError};
pub use index::{clamp_index, element_index, wrap_index};
pub use sequence::Sequence;
