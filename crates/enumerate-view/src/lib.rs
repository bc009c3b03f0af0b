/**
 * @file lib.rs
 * @author Krisna Pranav
 * @brief enumerate-view
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

pub mod adapters;
pub mod cursor;
pub mod lending;
pub mod sources;

pub use adapters::enumerate::enumerate;
pub use adapters::{EnumerateCursor, EnumerateEnd, EnumerateView};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Deferred adaptors, applied later with `|` or [`Pipe::pipe`](adapters::Pipe::pipe).
pub mod views {
    pub use crate::adapters::closure::enumerate;
}

pub mod prelude {
    pub use crate::adapters::{AdaptorClosure, Pipe, RangeAdaptor};
    pub use crate::cursor::{
        BidirectionalCursor, ForwardCursor, InputCursor, IntoReadOnly, RandomAccessCursor,
        Sentinel, Traversal,
    };
    pub use crate::lending::LendingIterator;
    pub use crate::sources::{CommonSequence, Sequence, SinglePass, SizedSequence};
    pub use crate::{enumerate, views, EnumerateView};
}
