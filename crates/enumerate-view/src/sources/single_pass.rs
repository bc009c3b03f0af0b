/**
 * @file single_pass.rs
 * @author Krisna Pranav
 * @brief sources[single_pass]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use std::fmt;

use super::Sequence;
use crate::cursor::{InputCursor, Sentinel};

/// Treats any `Iterator` as an input-only sequence.
///
/// There is no read-only mode: traversal consumes the iterator, so only the
/// owned value and `&mut` handles are sequences.
#[derive(Debug, Clone)]
pub struct SinglePass<I> {
    iter: I,
}

impl<I> SinglePass<I>
where
    I: Iterator,
{
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I> From<I> for SinglePass<I>
where
    I: Iterator,
{
    fn from(iter: I) -> Self {
        Self::new(iter)
    }
}

pub struct PassCursor<I>
where
    I: Iterator,
{
    iter: I,
    current: Option<I::Item>,
}

impl<I> PassCursor<I>
where
    I: Iterator,
{
    fn start(mut iter: I) -> Self {
        let current = iter.next();
        Self { iter, current }
    }

    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<I> InputCursor for PassCursor<I>
where
    I: Iterator,
{
    type Item<'a>
        = &'a mut I::Item
    where
        Self: 'a;

    fn get(&mut self) -> Self::Item<'_> {
        match self.current.as_mut() {
            Some(item) => item,
            None => panic!("read from an exhausted single-pass cursor"),
        }
    }

    fn advance(&mut self) {
        self.current = self.iter.next();
    }
}

impl<I> fmt::Debug for PassCursor<I>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassCursor")
            .field("exhausted", &self.is_exhausted())
            .finish()
    }
}

/// End of a single-pass sequence: reached once the iterator runs dry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exhausted;

impl<I> Sentinel<PassCursor<I>> for Exhausted
where
    I: Iterator,
{
    fn is_end(&self, cursor: &PassCursor<I>) -> bool {
        cursor.is_exhausted()
    }
}

impl<I> Sequence for SinglePass<I>
where
    I: Iterator,
{
    type Cursor = PassCursor<I>;
    type End = Exhausted;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        (PassCursor::start(self.iter), Exhausted)
    }

    // starting a cursor would pull an item, so the end is built directly
    fn end(self) -> Self::End {
        Exhausted
    }
}

impl<'a, I> Sequence for &'a mut SinglePass<I>
where
    I: Iterator,
{
    type Cursor = PassCursor<&'a mut I>;
    type End = Exhausted;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        (PassCursor::start(&mut self.iter), Exhausted)
    }

    // starting a cursor would pull an item, so the end is built directly
    fn end(self) -> Self::End {
        Exhausted
    }
}
