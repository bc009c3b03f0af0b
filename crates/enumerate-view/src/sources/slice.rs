/**
 * @file slice.rs
 * @author Krisna Pranav
 * @brief sources[slice]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use std::cmp::Ordering;

use super::{CommonSequence, Sequence, SizedSequence};
use crate::cursor::{
    BidirectionalCursor, ForwardCursor, InputCursor, IntoReadOnly, RandomAccessCursor, Sentinel,
    Traversal,
};

#[derive(Debug)]
pub struct SliceCursor<'s, T> {
    slice: &'s [T],
    pos: usize,
}

impl<'s, T> SliceCursor<'s, T> {
    pub fn new(slice: &'s [T], pos: usize) -> Self {
        Self { slice, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<'s, T> InputCursor for SliceCursor<'s, T> {
    type Item<'a>
        = &'s T
    where
        Self: 'a;

    const TRAVERSAL: Traversal = Traversal::RandomAccess;

    fn get(&mut self) -> Self::Item<'_> {
        let slice = self.slice;
        &slice[self.pos]
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> PartialOrd for SliceCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.pos.partial_cmp(&other.pos)
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    fn retreat(&mut self) {
        self.pos -= 1;
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    fn jump(&mut self, offset: isize) {
        self.pos = self.pos.wrapping_add_signed(offset);
    }

    fn distance_from(&self, origin: &Self) -> isize {
        self.pos as isize - origin.pos as isize
    }
}

/// Mutable-mode slice cursor. Not `Clone`: two copies would alias `&mut`.
#[derive(Debug)]
pub struct SliceCursorMut<'s, T> {
    slice: &'s mut [T],
    pos: usize,
}

impl<'s, T> SliceCursorMut<'s, T> {
    pub fn new(slice: &'s mut [T], pos: usize) -> Self {
        Self { slice, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'s, T> InputCursor for SliceCursorMut<'s, T> {
    type Item<'a>
        = &'a mut T
    where
        Self: 'a;

    const TRAVERSAL: Traversal = Traversal::RandomAccess;

    fn get(&mut self) -> Self::Item<'_> {
        &mut self.slice[self.pos]
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<T> PartialEq for SliceCursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> PartialOrd for SliceCursorMut<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.pos.partial_cmp(&other.pos)
    }
}

impl<T> ForwardCursor for SliceCursorMut<'_, T> {}

impl<T> BidirectionalCursor for SliceCursorMut<'_, T> {
    fn retreat(&mut self) {
        self.pos -= 1;
    }
}

impl<T> RandomAccessCursor for SliceCursorMut<'_, T> {
    fn jump(&mut self, offset: isize) {
        self.pos = self.pos.wrapping_add_signed(offset);
    }

    fn distance_from(&self, origin: &Self) -> isize {
        self.pos as isize - origin.pos as isize
    }
}

impl<'s, T> IntoReadOnly for SliceCursorMut<'s, T> {
    type ReadOnly = SliceCursor<'s, T>;

    fn into_read_only(self) -> Self::ReadOnly {
        SliceCursor::new(self.slice, self.pos)
    }
}

impl<'s, T> From<SliceCursorMut<'s, T>> for SliceCursor<'s, T> {
    fn from(cursor: SliceCursorMut<'s, T>) -> Self {
        cursor.into_read_only()
    }
}

/// End of a slice. Shared by both cursor modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceEnd {
    pos: usize,
}

impl SliceEnd {
    pub fn new(pos: usize) -> Self {
        Self { pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Sentinel<SliceCursor<'_, T>> for SliceEnd {
    fn is_end(&self, cursor: &SliceCursor<'_, T>) -> bool {
        cursor.pos == self.pos
    }
}

impl<T> Sentinel<SliceCursorMut<'_, T>> for SliceEnd {
    fn is_end(&self, cursor: &SliceCursorMut<'_, T>) -> bool {
        cursor.pos == self.pos
    }
}

impl IntoReadOnly for SliceEnd {
    type ReadOnly = SliceEnd;

    fn into_read_only(self) -> Self::ReadOnly {
        self
    }
}

impl<'s, T> Sequence for &'s [T] {
    type Cursor = SliceCursor<'s, T>;
    type End = SliceEnd;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        (SliceCursor::new(self, 0), SliceEnd::new(self.len()))
    }
}

impl<'s, T> CommonSequence for &'s [T] {
    fn end_cursor(self) -> Self::Cursor {
        SliceCursor::new(self, self.len())
    }
}

impl<'s, T> Sequence for &'s mut [T] {
    type Cursor = SliceCursorMut<'s, T>;
    type End = SliceEnd;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        let len = self.len();
        (SliceCursorMut::new(self, 0), SliceEnd::new(len))
    }
}

impl<'s, T> CommonSequence for &'s mut [T] {
    fn end_cursor(self) -> Self::Cursor {
        let len = self.len();
        SliceCursorMut::new(self, len)
    }
}

impl<T> SizedSequence for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<'s, T> Sequence for &'s Vec<T> {
    type Cursor = SliceCursor<'s, T>;
    type End = SliceEnd;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        self.as_slice().bounds()
    }
}

impl<'s, T> CommonSequence for &'s Vec<T> {
    fn end_cursor(self) -> Self::Cursor {
        self.as_slice().end_cursor()
    }
}

impl<'s, T> Sequence for &'s mut Vec<T> {
    type Cursor = SliceCursorMut<'s, T>;
    type End = SliceEnd;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        self.as_mut_slice().bounds()
    }
}

impl<'s, T> CommonSequence for &'s mut Vec<T> {
    fn end_cursor(self) -> Self::Cursor {
        self.as_mut_slice().end_cursor()
    }
}

impl<T> SizedSequence for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<'s, T, const N: usize> Sequence for &'s [T; N] {
    type Cursor = SliceCursor<'s, T>;
    type End = SliceEnd;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        self.as_slice().bounds()
    }
}

impl<'s, T, const N: usize> CommonSequence for &'s [T; N] {
    fn end_cursor(self) -> Self::Cursor {
        self.as_slice().end_cursor()
    }
}

impl<'s, T, const N: usize> Sequence for &'s mut [T; N] {
    type Cursor = SliceCursorMut<'s, T>;
    type End = SliceEnd;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        self.as_mut_slice().bounds()
    }
}

impl<'s, T, const N: usize> CommonSequence for &'s mut [T; N] {
    fn end_cursor(self) -> Self::Cursor {
        self.as_mut_slice().end_cursor()
    }
}

impl<T, const N: usize> SizedSequence for [T; N] {
    fn size(&self) -> usize {
        N
    }
}
