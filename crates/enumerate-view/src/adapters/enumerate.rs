/**
 * @file enumerate.rs
 * @author Krisna Pranav
 * @brief enumerate
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use std::any::type_name;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::cursor::{
    BidirectionalCursor, ForwardCursor, InputCursor, IntoReadOnly, RandomAccessCursor, Sentinel,
    Traversal,
};
use crate::lending::Walk;
use crate::sources::{CommonSequence, Sequence, SizedSequence};
use crate::{Error, Result};

type CursorOf<S> = EnumerateCursor<<S as Sequence>::Cursor>;
type EndOf<S> = EnumerateEnd<<S as Sequence>::End>;

/// Pairs every element of `base` with its zero-based position.
///
/// The view owns `base` and keeps no other state; all counting happens in
/// the cursors it hands out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumerateView<S> {
    base: S,
}

/// Eager form of the view: wraps `seq` right away.
///
/// ```
/// use enumerate_view::prelude::*;
///
/// let data = vec![10, 20, 30];
/// let view = enumerate(&data);
/// let mut walk = view.walk();
///
/// while let Some((i, x)) = walk.next() {
///     assert_eq!(*x, data[i]);
/// }
/// ```
pub fn enumerate<S>(seq: S) -> EnumerateView<S> {
    EnumerateView::new(seq)
}

impl<S> EnumerateView<S> {
    pub fn new(base: S) -> Self {
        tracing::trace!(sequence = type_name::<S>(), "creating enumerate view");
        Self { base }
    }

    pub fn base(&self) -> &S {
        &self.base
    }

    pub fn into_base(self) -> S {
        self.base
    }

    pub fn begin<'a>(&'a self) -> CursorOf<&'a S>
    where
        &'a S: Sequence,
    {
        EnumerateCursor::new(Sequence::begin(&self.base))
    }

    pub fn end<'a>(&'a self) -> EndOf<&'a S>
    where
        &'a S: Sequence,
    {
        EnumerateEnd::new(Sequence::end(&self.base))
    }

    /// The end position as a cursor, its index being the length of the view.
    pub fn end_cursor<'a>(&'a self) -> CursorOf<&'a S>
    where
        &'a S: CommonSequence,
        S: SizedSequence,
    {
        EnumerateCursor::at(CommonSequence::end_cursor(&self.base), self.base.size())
    }

    pub fn walk<'a>(&'a self) -> Walk<CursorOf<&'a S>, EndOf<&'a S>>
    where
        &'a S: Sequence,
    {
        Sequence::walk(self)
    }

    pub fn begin_mut<'a>(&'a mut self) -> CursorOf<&'a mut S>
    where
        &'a mut S: Sequence,
    {
        EnumerateCursor::new(Sequence::begin(&mut self.base))
    }

    pub fn end_mut<'a>(&'a mut self) -> EndOf<&'a mut S>
    where
        &'a mut S: Sequence,
    {
        EnumerateEnd::new(Sequence::end(&mut self.base))
    }

    /// Mutable cursor and end marker together, since the mutable borrow
    /// taken by `begin_mut` rules out calling `end_mut` while it lives.
    pub fn bounds_mut<'a>(&'a mut self) -> (CursorOf<&'a mut S>, EndOf<&'a mut S>)
    where
        &'a mut S: Sequence,
    {
        Sequence::bounds(self)
    }

    pub fn end_cursor_mut<'a>(&'a mut self) -> CursorOf<&'a mut S>
    where
        &'a mut S: CommonSequence,
        S: SizedSequence,
    {
        let len = self.base.size();
        EnumerateCursor::at(CommonSequence::end_cursor(&mut self.base), len)
    }

    pub fn walk_mut<'a>(&'a mut self) -> Walk<CursorOf<&'a mut S>, EndOf<&'a mut S>>
    where
        &'a mut S: Sequence,
    {
        Sequence::walk(self)
    }

    /// Read-only cursor positioned on element `index`.
    pub fn cursor_at<'a>(&'a self, index: usize) -> Result<CursorOf<&'a S>>
    where
        &'a S: Sequence,
        <&'a S as Sequence>::Cursor: RandomAccessCursor,
        S: SizedSequence,
    {
        let len = self.base.size();
        let offset = match isize::try_from(index) {
            Ok(offset) if index < len => offset,
            _ => {
                let tier = <<&'a S as Sequence>::Cursor as InputCursor>::TRAVERSAL;
                tracing::debug!(index, len, %tier, "enumerate lookup out of range");
                return Err(Error::OutOfRange { index, len });
            }
        };

        let mut cursor = self.begin();
        cursor.jump(offset);
        Ok(cursor)
    }
}

impl<S> EnumerateView<S>
where
    S: SizedSequence,
{
    pub fn size(&self) -> usize {
        self.base.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<S> From<S> for EnumerateView<S> {
    fn from(base: S) -> Self {
        Self::new(base)
    }
}

impl<'a, S> Sequence for &'a EnumerateView<S>
where
    &'a S: Sequence,
{
    type Cursor = CursorOf<&'a S>;
    type End = EndOf<&'a S>;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        let (cursor, end) = Sequence::bounds(&self.base);
        (EnumerateCursor::new(cursor), EnumerateEnd::new(end))
    }
}

impl<'a, S> Sequence for &'a mut EnumerateView<S>
where
    &'a mut S: Sequence,
{
    type Cursor = CursorOf<&'a mut S>;
    type End = EndOf<&'a mut S>;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        let (cursor, end) = Sequence::bounds(&mut self.base);
        (EnumerateCursor::new(cursor), EnumerateEnd::new(end))
    }
}

impl<'a, S> CommonSequence for &'a EnumerateView<S>
where
    &'a S: CommonSequence,
    S: SizedSequence,
{
    fn end_cursor(self) -> Self::Cursor {
        EnumerateView::<S>::end_cursor(self)
    }
}

impl<'a, S> CommonSequence for &'a mut EnumerateView<S>
where
    &'a mut S: CommonSequence,
    S: SizedSequence,
{
    fn end_cursor(self) -> Self::Cursor {
        EnumerateView::<S>::end_cursor_mut(self)
    }
}

impl<S> SizedSequence for EnumerateView<S>
where
    S: SizedSequence,
{
    fn size(&self) -> usize {
        self.base.size()
    }
}

/// Position in an [`EnumerateView`]: a base cursor plus the number of steps
/// taken since the beginning.
#[derive(Debug, Clone, Copy)]
pub struct EnumerateCursor<C> {
    base: C,
    count: usize,
}

impl<C> EnumerateCursor<C> {
    pub fn new(base: C) -> Self {
        Self::at(base, 0)
    }

    pub fn at(base: C, count: usize) -> Self {
        Self { base, count }
    }

    pub fn index(&self) -> usize {
        self.count
    }

    pub fn base(&self) -> &C {
        &self.base
    }

    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C> InputCursor for EnumerateCursor<C>
where
    C: InputCursor,
{
    type Item<'a>
        = (usize, C::Item<'a>)
    where
        C: 'a;

    const TRAVERSAL: Traversal = C::TRAVERSAL;

    fn get(&mut self) -> Self::Item<'_> {
        (self.count, self.base.get())
    }

    fn advance(&mut self) {
        self.base.advance();
        self.count += 1;
    }
}

impl<C> EnumerateCursor<C>
where
    C: ForwardCursor + Clone,
{
    /// Steps forward and returns the position held before the step.
    pub fn advance_post(&mut self) -> Self {
        let prior = self.clone();
        self.advance();
        prior
    }
}

impl<C> EnumerateCursor<C>
where
    C: BidirectionalCursor + Clone,
{
    pub fn retreat_post(&mut self) -> Self {
        let prior = self.clone();
        self.retreat();
        prior
    }
}

impl<C> PartialEq for EnumerateCursor<C>
where
    C: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<C> PartialOrd for EnumerateCursor<C>
where
    C: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base.partial_cmp(&other.base)
    }
}

impl<C> ForwardCursor for EnumerateCursor<C> where C: ForwardCursor {}

impl<C> BidirectionalCursor for EnumerateCursor<C>
where
    C: BidirectionalCursor,
{
    fn retreat(&mut self) {
        self.base.retreat();
        self.count -= 1;
    }
}

impl<C> RandomAccessCursor for EnumerateCursor<C>
where
    C: RandomAccessCursor,
{
    fn jump(&mut self, offset: isize) {
        self.count = match self.count.checked_add_signed(offset) {
            Some(count) => count,
            None => panic!("jump by {offset} leaves the view from index {}", self.count),
        };
        self.base.jump(offset);
    }

    fn distance_from(&self, origin: &Self) -> isize {
        self.base.distance_from(&origin.base)
    }
}

impl<C> AddAssign<isize> for EnumerateCursor<C>
where
    C: RandomAccessCursor,
{
    fn add_assign(&mut self, offset: isize) {
        self.jump(offset);
    }
}

impl<C> SubAssign<isize> for EnumerateCursor<C>
where
    C: RandomAccessCursor,
{
    fn sub_assign(&mut self, offset: isize) {
        self.jump(-offset);
    }
}

impl<C> Add<isize> for EnumerateCursor<C>
where
    C: RandomAccessCursor,
{
    type Output = Self;

    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<C> Sub<isize> for EnumerateCursor<C>
where
    C: RandomAccessCursor,
{
    type Output = Self;

    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}

impl<C> IntoReadOnly for EnumerateCursor<C>
where
    C: IntoReadOnly,
{
    type ReadOnly = EnumerateCursor<C::ReadOnly>;

    fn into_read_only(self) -> Self::ReadOnly {
        EnumerateCursor::at(self.base.into_read_only(), self.count)
    }
}

/// End of an [`EnumerateView`]. Only the base position decides termination;
/// the index plays no part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerateEnd<E> {
    base: E,
}

impl<E> EnumerateEnd<E> {
    pub fn new(base: E) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &E {
        &self.base
    }

    pub fn into_base(self) -> E {
        self.base
    }
}

impl<C, E> Sentinel<EnumerateCursor<C>> for EnumerateEnd<E>
where
    E: Sentinel<C>,
{
    fn is_end(&self, cursor: &EnumerateCursor<C>) -> bool {
        self.base.is_end(&cursor.base)
    }
}

impl<C, E> PartialEq<EnumerateEnd<E>> for EnumerateCursor<C>
where
    E: Sentinel<C>,
{
    fn eq(&self, end: &EnumerateEnd<E>) -> bool {
        end.is_end(self)
    }
}

impl<C, E> PartialEq<EnumerateCursor<C>> for EnumerateEnd<E>
where
    E: Sentinel<C>,
{
    fn eq(&self, cursor: &EnumerateCursor<C>) -> bool {
        self.is_end(cursor)
    }
}

impl<E> IntoReadOnly for EnumerateEnd<E>
where
    E: IntoReadOnly,
{
    type ReadOnly = EnumerateEnd<E::ReadOnly>;

    fn into_read_only(self) -> Self::ReadOnly {
        EnumerateEnd::new(self.base.into_read_only())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use proptest::prelude::*;

    use super::*;
    use crate::lending::LendingIterator;
    use crate::sources::{SinglePass, SliceCursor};

    fn pairs(view: &EnumerateView<Vec<i32>>) -> Vec<(usize, i32)> {
        let mut walk = view.walk();
        let mut out = Vec::new();
        while let Some((i, x)) = walk.next() {
            out.push((i, *x));
        }
        out
    }

    #[test]
    fn three_elements() {
        let view = enumerate(vec![10, 20, 30]);
        let mut cursor = view.begin();
        let end = view.end();

        assert_eq!(cursor.get(), (0, &10));
        cursor.advance();
        assert_eq!(cursor.get(), (1, &20));
        cursor.advance();
        assert_eq!(cursor.get(), (2, &30));
        assert!(cursor != end);
        cursor.advance();
        assert!(cursor == end);
        assert!(end == cursor);
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn empty_sequence() {
        let view = enumerate(Vec::<i32>::new());

        assert!(view.begin() == view.end());
        assert!(pairs(&view).is_empty());
        assert!(view.is_empty());
    }

    #[test]
    fn size_is_forwarded() {
        let view = enumerate([1, 2, 3, 4, 5]);
        assert_eq!(view.size(), 5);
        assert_eq!(SizedSequence::size(&&view), 5);

        let counted = enumerate(0usize..7);
        assert_eq!(counted.size(), 7);
    }

    #[test]
    fn tier_is_mirrored() {
        assert_eq!(
            <EnumerateCursor<SliceCursor<'static, u8>> as InputCursor>::TRAVERSAL,
            Traversal::RandomAccess
        );
        assert_eq!(
            <EnumerateCursor<crate::sources::PassCursor<std::vec::IntoIter<u8>>> as InputCursor>::TRAVERSAL,
            Traversal::Input
        );
    }

    /// Forward-only cursor over a slice.
    #[derive(Debug, Clone, PartialEq)]
    struct Forward<'s> {
        slice: &'s [i32],
        pos: usize,
    }

    impl<'s> InputCursor for Forward<'s> {
        type Item<'a>
            = &'s i32
        where
            Self: 'a;

        const TRAVERSAL: Traversal = Traversal::Forward;

        fn get(&mut self) -> Self::Item<'_> {
            let slice = self.slice;
            &slice[self.pos]
        }

        fn advance(&mut self) {
            self.pos += 1;
        }
    }

    impl ForwardCursor for Forward<'_> {}

    /// Steps both ways but cannot jump.
    #[derive(Debug, Clone, PartialEq)]
    struct Bidirectional<'s>(Forward<'s>);

    impl<'s> InputCursor for Bidirectional<'s> {
        type Item<'a>
            = &'s i32
        where
            Self: 'a;

        const TRAVERSAL: Traversal = Traversal::Bidirectional;

        fn get(&mut self) -> Self::Item<'_> {
            self.0.get()
        }

        fn advance(&mut self) {
            self.0.advance();
        }
    }

    impl ForwardCursor for Bidirectional<'_> {}

    impl BidirectionalCursor for Bidirectional<'_> {
        fn retreat(&mut self) {
            self.0.pos -= 1;
        }
    }

    #[test]
    fn forward_only_base() {
        let data = [1, 2, 3];
        let mut cursor = EnumerateCursor::new(Forward {
            slice: &data,
            pos: 0,
        });

        assert_eq!(
            <EnumerateCursor<Forward<'_>> as InputCursor>::TRAVERSAL,
            Traversal::Forward
        );
        assert!(EnumerateCursor::<Forward<'_>>::TRAVERSAL.is_multi_pass());
        assert!(!EnumerateCursor::<Forward<'_>>::TRAVERSAL.can_retreat());

        let mut prior = cursor.advance_post();
        assert_eq!(prior.get(), (0, &1));
        assert_eq!(cursor.get(), (1, &2));
        assert!(prior != cursor);

        prior.advance();
        assert!(prior == cursor);
    }

    #[test]
    fn bidirectional_only_base() {
        let data = [1, 2, 3];
        let mut cursor = EnumerateCursor::new(Bidirectional(Forward {
            slice: &data,
            pos: 0,
        }));

        assert_eq!(
            <EnumerateCursor<Bidirectional<'_>> as InputCursor>::TRAVERSAL,
            Traversal::Bidirectional
        );
        assert!(EnumerateCursor::<Bidirectional<'_>>::TRAVERSAL.can_retreat());

        cursor.advance();
        cursor.advance();
        let mut prior = cursor.retreat_post();
        assert_eq!(prior.get(), (2, &3));
        assert_eq!(cursor.get(), (1, &2));

        cursor.retreat();
        assert_eq!(cursor.get(), (0, &1));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn post_forms_return_the_prior_position() {
        let view = enumerate(vec!['x', 'y', 'z']);
        let mut cursor = view.begin();

        let mut prior = cursor.advance_post();
        assert_eq!(prior.get(), (0, &'x'));
        assert_eq!(cursor.index(), 1);

        cursor.advance();
        let mut prior = cursor.retreat_post();
        assert_eq!(prior.get(), (2, &'z'));
        assert_eq!(cursor.get(), (1, &'y'));
    }

    #[test]
    fn end_cursor_counts_the_whole_view() {
        let view = enumerate(vec![1, 2, 3]);
        let mut end_cursor = view.end_cursor();

        assert_eq!(end_cursor.index(), 3);
        assert!(end_cursor == view.end());
        assert_eq!(CommonSequence::end_cursor(&view).index(), 3);

        let mut owned = enumerate(vec![1, 2]);
        assert_eq!(CommonSequence::end_cursor(&mut owned).index(), 2);

        end_cursor.retreat();
        assert_eq!(end_cursor.get(), (2, &3));
    }

    #[test]
    fn mutable_mode_writes_through() {
        let mut view = enumerate(vec![1, 2, 3]);

        let mut walk = view.walk_mut();
        while let Some((i, x)) = walk.next() {
            *x += i as i32 * 100;
        }

        assert_eq!(view.base(), &vec![1, 102, 203]);
    }

    #[test]
    fn mutable_cursor_becomes_read_only() {
        let mut view = enumerate(vec![4, 5, 6]);
        let (mut cursor, end) = view.bounds_mut();
        cursor.advance();

        let end = end.into_read_only();
        let mut cursor = cursor.into_read_only();
        assert_eq!(cursor.get(), (1, &5));
        assert!(cursor != end);

        let mut end_cursor = view.end_cursor_mut();
        end_cursor.retreat();
        assert_eq!(end_cursor.get(), (2, &mut 6));
    }

    #[test]
    fn single_pass_has_only_mutable_mode() {
        let mut view = enumerate(SinglePass::new("abc".chars()));
        let mut walk = view.walk_mut();
        let mut seen = Vec::new();

        while let Some((i, c)) = walk.next() {
            seen.push((i, *c));
        }

        assert_eq!(seen, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    }

    #[test]
    fn single_pass_end_taken_first() {
        let mut view = enumerate(SinglePass::new(vec![10, 20, 30].into_iter()));
        let end = view.end_mut();
        let mut cursor = view.begin_mut();
        let mut seen = Vec::new();

        while cursor != end {
            let (i, x) = cursor.get();
            seen.push((i, *x));
            cursor.advance();
        }

        assert_eq!(seen, vec![(0, 10), (1, 20), (2, 30)]);
    }

    #[test]
    fn views_nest() {
        let inner = enumerate(vec![7, 8]);
        let outer = enumerate(inner);
        let mut walk = outer.walk();
        let mut seen = Vec::new();

        while let Some((outer_index, (inner_index, x))) = walk.next() {
            seen.push((outer_index, inner_index, *x));
        }

        assert_eq!(seen, vec![(0, 0, 7), (1, 1, 8)]);
        assert_eq!(outer.size(), 2);
    }

    #[test]
    fn cursor_at_checks_bounds() {
        let view = enumerate(vec![3, 1, 4, 1, 5]);

        let mut cursor = view.cursor_at(2).unwrap();
        assert_eq!(cursor.get(), (2, &4));

        assert_eq!(
            view.cursor_at(5).unwrap_err(),
            Error::OutOfRange { index: 5, len: 5 }
        );
    }

    #[test]
    #[should_panic(expected = "leaves the view")]
    fn jump_before_the_start_panics() {
        let view = enumerate(vec![1, 2, 3]);
        let mut cursor = view.begin();
        cursor -= 1;
    }

    #[test]
    fn default_view() {
        let view: EnumerateView<Vec<u8>> = EnumerateView::default();
        assert!(view.is_empty());
        assert!(view.begin() == view.end());
    }

    proptest! {
        #[test]
        fn yields_index_and_element(data in proptest::collection::vec(any::<i32>(), 0..64)) {
            let view = enumerate(data.clone());
            let expected = data.iter().copied().enumerate().collect_vec();

            prop_assert_eq!(pairs(&view), expected);
            prop_assert_eq!(view.size(), data.len());
        }

        #[test]
        fn mutable_and_read_only_agree(data in proptest::collection::vec(any::<i32>(), 0..64)) {
            let mut view = enumerate(data);
            let read_only = pairs(&view);

            let mut walk = view.walk_mut();
            let mut mutable = Vec::new();
            while let Some((i, x)) = walk.next() {
                mutable.push((i, *x));
            }

            prop_assert_eq!(read_only, mutable);
        }

        #[test]
        fn retreat_undoes_advance(data in proptest::collection::vec(any::<i32>(), 1..64), steps in 0usize..64) {
            let view = enumerate(data.clone());
            let mut cursor = view.begin();
            for _ in 0..steps.min(data.len() - 1) {
                cursor.advance();
            }

            let before = cursor;
            cursor.advance();
            cursor.retreat();

            prop_assert!(cursor == before);
            prop_assert_eq!(cursor.index(), before.index());
        }

        #[test]
        fn jump_matches_single_steps(data in proptest::collection::vec(any::<i32>(), 0..64), k in 0usize..64) {
            let k = k.min(data.len());
            let view = enumerate(data);

            let mut jumped = view.begin();
            jumped += k as isize;

            let mut stepped = view.begin();
            for _ in 0..k {
                stepped.advance();
            }

            prop_assert!(jumped == stepped);
            prop_assert_eq!(jumped.index(), k);
            prop_assert_eq!(stepped.index(), k);
            prop_assert_eq!(jumped.distance_from(&view.begin()), k as isize);
        }
    }
}
