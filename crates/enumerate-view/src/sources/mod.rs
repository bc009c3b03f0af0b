/**
 * @file mod.rs
 * @author Krisna Pranav
 * @brief sources
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

mod counting;
mod single_pass;
mod slice;

pub use counting::{CountingCursor, CountingEnd};
pub use single_pass::{Exhausted, PassCursor, SinglePass};
pub use slice::{SliceCursor, SliceCursorMut, SliceEnd};

use crate::cursor::{InputCursor, Sentinel};
use crate::lending::Walk;

/// Something that can be traversed with a cursor and an end marker.
///
/// Implemented on the handle used for traversal, the same way
/// `IntoIterator` is: `&S` traverses in read-only mode, `&mut S` in mutable
/// mode and `S` itself for sources that are consumed by traversal.
pub trait Sequence: Sized {
    type Cursor: InputCursor;
    type End: Sentinel<Self::Cursor>;

    fn bounds(self) -> (Self::Cursor, Self::End);

    fn begin(self) -> Self::Cursor {
        self.bounds().0
    }

    fn end(self) -> Self::End {
        self.bounds().1
    }

    fn walk(self) -> Walk<Self::Cursor, Self::End> {
        let (cursor, end) = self.bounds();
        Walk::new(cursor, end)
    }
}

/// A sequence whose end position is also a valid cursor.
pub trait CommonSequence: Sequence {
    fn end_cursor(self) -> Self::Cursor;
}

/// A sequence that knows its length without traversing.
pub trait SizedSequence {
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

// a handle to a handle traverses like the inner handle, which is what lets
// views hold borrowed sequences such as `&[T]` by value

impl<'a, 'b, S> Sequence for &'a &'b S
where
    S: ?Sized,
    &'b S: Sequence,
{
    type Cursor = <&'b S as Sequence>::Cursor;
    type End = <&'b S as Sequence>::End;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        (*self).bounds()
    }
}

impl<'a, 'b, S> Sequence for &'a mut &'b S
where
    S: ?Sized,
    &'b S: Sequence,
{
    type Cursor = <&'b S as Sequence>::Cursor;
    type End = <&'b S as Sequence>::End;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        (*self).bounds()
    }
}

impl<'a, 'b, S> Sequence for &'a &'b mut S
where
    S: ?Sized,
    &'a S: Sequence,
{
    type Cursor = <&'a S as Sequence>::Cursor;
    type End = <&'a S as Sequence>::End;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        let inner: &'a S = self;
        inner.bounds()
    }
}

impl<'a, 'b, S> Sequence for &'a mut &'b mut S
where
    S: ?Sized,
    &'a mut S: Sequence,
{
    type Cursor = <&'a mut S as Sequence>::Cursor;
    type End = <&'a mut S as Sequence>::End;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        let inner: &'a mut S = self;
        inner.bounds()
    }
}

impl<'a, 'b, S> CommonSequence for &'a &'b S
where
    S: ?Sized,
    &'b S: CommonSequence,
{
    fn end_cursor(self) -> Self::Cursor {
        (*self).end_cursor()
    }
}

impl<'a, 'b, S> CommonSequence for &'a &'b mut S
where
    S: ?Sized,
    &'a S: CommonSequence,
{
    fn end_cursor(self) -> Self::Cursor {
        let inner: &'a S = self;
        inner.end_cursor()
    }
}

impl<'a, 'b, S> CommonSequence for &'a mut &'b mut S
where
    S: ?Sized,
    &'a mut S: CommonSequence,
{
    fn end_cursor(self) -> Self::Cursor {
        let inner: &'a mut S = self;
        inner.end_cursor()
    }
}

impl<S> SizedSequence for &S
where
    S: SizedSequence + ?Sized,
{
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<S> SizedSequence for &mut S
where
    S: SizedSequence + ?Sized,
{
    fn size(&self) -> usize {
        (**self).size()
    }
}
