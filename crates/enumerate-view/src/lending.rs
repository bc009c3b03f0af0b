/**
 * @file lending.rs
 * @author Krisna Pranav
 * @brief lending
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use crate::cursor::{InputCursor, Sentinel};

/// An iterator whose items may borrow from the iterator itself.
///
/// Drive it with `while let Some(item) = iter.next()`.
pub trait LendingIterator {
    type Item<'a>
    where
        Self: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>>;

    fn count(self) -> usize
    where
        Self: Sized,
    {
        let mut iter = self;
        let mut count = 0;

        while iter.next().is_some() {
            count += 1;
        }

        count
    }
}

impl<'a, I> LendingIterator for &'a mut I
where
    I: LendingIterator,
{
    type Item<'b>
        = I::Item<'b>
    where
        I: 'b,
        'a: 'b;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        (*self).next()
    }
}

/// Walks a cursor up to an end marker, lending each element on the way.
///
/// The cursor only advances when the next element is requested, so a walk
/// does no work beyond the element it hands out.
#[derive(Debug, Clone)]
pub struct Walk<C, E> {
    cursor: C,
    end: E,
    started: bool,
}

impl<C, E> Walk<C, E> {
    pub fn new(cursor: C, end: E) -> Self {
        Self {
            cursor,
            end,
            started: false,
        }
    }

    pub fn into_parts(self) -> (C, E) {
        (self.cursor, self.end)
    }
}

impl<C, E> LendingIterator for Walk<C, E>
where
    C: InputCursor,
    E: Sentinel<C>,
{
    type Item<'a>
        = C::Item<'a>
    where
        Self: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        if self.started {
            self.cursor.advance();
        }

        if self.end.is_end(&self.cursor) {
            // stay parked on the end so repeated calls keep returning None
            self.started = false;
            return None;
        }

        self.started = true;
        Some(self.cursor.get())
    }
}
