/**
 * @file counting.rs
 * @author Krisna Pranav
 * @brief sources[counting]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use std::ops::Range;

use super::{CommonSequence, Sequence, SizedSequence};
use crate::cursor::{
    BidirectionalCursor, ForwardCursor, InputCursor, RandomAccessCursor, Sentinel, Traversal,
};

/// Cursor over `start..end` that reads its position as the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountingCursor {
    current: usize,
}

impl CountingCursor {
    pub fn new(current: usize) -> Self {
        Self { current }
    }
}

impl InputCursor for CountingCursor {
    type Item<'a>
        = usize
    where
        Self: 'a;

    const TRAVERSAL: Traversal = Traversal::RandomAccess;

    fn get(&mut self) -> Self::Item<'_> {
        self.current
    }

    fn advance(&mut self) {
        self.current += 1;
    }
}

impl ForwardCursor for CountingCursor {}

impl BidirectionalCursor for CountingCursor {
    fn retreat(&mut self) {
        self.current -= 1;
    }
}

impl RandomAccessCursor for CountingCursor {
    fn jump(&mut self, offset: isize) {
        self.current = self.current.wrapping_add_signed(offset);
    }

    fn distance_from(&self, origin: &Self) -> isize {
        self.current as isize - origin.current as isize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingEnd {
    end: usize,
}

impl Sentinel<CountingCursor> for CountingEnd {
    fn is_end(&self, cursor: &CountingCursor) -> bool {
        cursor.current == self.end
    }
}

// a reversed range is empty, so its end collapses onto its start
fn normalized(range: &Range<usize>) -> (usize, usize) {
    (range.start, range.end.max(range.start))
}

impl Sequence for Range<usize> {
    type Cursor = CountingCursor;
    type End = CountingEnd;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        (&self).bounds()
    }
}

impl Sequence for &Range<usize> {
    type Cursor = CountingCursor;
    type End = CountingEnd;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        let (start, end) = normalized(self);
        (CountingCursor::new(start), CountingEnd { end })
    }
}

impl Sequence for &mut Range<usize> {
    type Cursor = CountingCursor;
    type End = CountingEnd;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        (&*self).bounds()
    }
}

impl CommonSequence for &Range<usize> {
    fn end_cursor(self) -> Self::Cursor {
        CountingCursor::new(normalized(self).1)
    }
}

impl CommonSequence for &mut Range<usize> {
    fn end_cursor(self) -> Self::Cursor {
        (&*self).end_cursor()
    }
}

impl SizedSequence for Range<usize> {
    fn size(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}
