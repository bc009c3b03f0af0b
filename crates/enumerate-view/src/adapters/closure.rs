/**
 * @file closure.rs
 * @author Krisna Pranav
 * @brief closure
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::ops::BitOr;

use super::enumerate::EnumerateView;
use crate::sources::SinglePass;

/// A transformation from one sequence into another.
pub trait RangeAdaptor<S> {
    type Output;

    fn adapt(&self, seq: S) -> Self::Output;
}

impl<S, A> RangeAdaptor<S> for &A
where
    A: RangeAdaptor<S> + ?Sized,
{
    type Output = A::Output;

    fn adapt(&self, seq: S) -> Self::Output {
        (**self).adapt(seq)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Enumerate;

impl<S> RangeAdaptor<S> for Enumerate {
    type Output = EnumerateView<S>;

    fn adapt(&self, seq: S) -> Self::Output {
        EnumerateView::new(seq)
    }
}

/// Any `Fn(S) -> O` as an adaptor. Captured values act as bound arguments.
#[derive(Clone, Copy)]
pub struct FnAdaptor<F> {
    f: F,
}

impl<F> FnAdaptor<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<S, O, F> RangeAdaptor<S> for FnAdaptor<F>
where
    F: Fn(S) -> O,
{
    type Output = O;

    fn adapt(&self, seq: S) -> Self::Output {
        (self.f)(seq)
    }
}

impl<F> fmt::Debug for FnAdaptor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAdaptor")
            .field("f", &type_name::<F>())
            .finish()
    }
}

/// How an [`AdaptorClosure`] gets hold of its adaptor.
pub trait Holder<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

/// Keeps the adaptor value given at construction.
#[derive(Debug, Clone, Copy)]
pub struct Stored<T>(T);

impl<T> Holder<T> for Stored<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0)
    }
}

/// Keeps nothing and builds `T::default()` whenever the adaptor is needed.
pub struct Rebuilt<T>(PhantomData<fn() -> T>);

impl<T> Rebuilt<T> {
    fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Holder<T> for Rebuilt<T>
where
    T: Default,
{
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&T::default())
    }
}

impl<T> Clone for Rebuilt<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Rebuilt<T> {}

impl<T> fmt::Debug for Rebuilt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rebuilt<{}>", type_name::<T>())
    }
}

/// An adaptor that has not met its sequence yet.
///
/// Apply it right away with [`AdaptorClosure::apply`], or later through
/// [`Pipe::pipe`] or `|` on the sequence types of this crate. Adaptors with a
/// `Default` form use [`Rebuilt`] and take no space; others are [`Stored`].
pub struct AdaptorClosure<T, H = Stored<T>> {
    holder: H,
    _adaptor: PhantomData<fn() -> T>,
}

impl<T> AdaptorClosure<T, Stored<T>> {
    /// Keeps `adaptor` inside the closure.
    ///
    /// The holder is picked by the constructor, not by whether `T` is
    /// `Default`: `new(Enumerate)` still stores the (empty) value. Use
    /// [`AdaptorClosure::rebuilt`] for adaptors that need no stored state.
    pub fn new(adaptor: T) -> Self {
        Self {
            holder: Stored(adaptor),
            _adaptor: PhantomData,
        }
    }
}

impl<T> AdaptorClosure<T, Rebuilt<T>>
where
    T: Default,
{
    /// Zero-sized closure that builds `T::default()` on every application.
    /// The form to use for any `Default` adaptor.
    pub fn rebuilt() -> Self {
        Self {
            holder: Rebuilt::new(),
            _adaptor: PhantomData,
        }
    }
}

impl<T> Default for AdaptorClosure<T, Rebuilt<T>>
where
    T: Default,
{
    fn default() -> Self {
        Self::rebuilt()
    }
}

impl<T, H> AdaptorClosure<T, H>
where
    H: Holder<T>,
{
    pub fn apply<S>(&self, seq: S) -> T::Output
    where
        T: RangeAdaptor<S>,
    {
        tracing::trace!(
            adaptor = type_name::<T>(),
            sequence = type_name::<S>(),
            "applying adaptor"
        );

        self.holder.with(|adaptor| adaptor.adapt(seq))
    }
}

impl<S, T, H> RangeAdaptor<S> for AdaptorClosure<T, H>
where
    T: RangeAdaptor<S>,
    H: Holder<T>,
{
    type Output = T::Output;

    fn adapt(&self, seq: S) -> Self::Output {
        self.apply(seq)
    }
}

impl<T, H> Clone for AdaptorClosure<T, H>
where
    H: Clone,
{
    fn clone(&self) -> Self {
        Self {
            holder: self.holder.clone(),
            _adaptor: PhantomData,
        }
    }
}

impl<T, H> Copy for AdaptorClosure<T, H> where H: Copy {}

impl<T, H> fmt::Debug for AdaptorClosure<T, H>
where
    H: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptorClosure")
            .field("holder", &self.holder)
            .finish()
    }
}

/// `first` then `second`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<S, A, B> RangeAdaptor<S> for Chain<A, B>
where
    A: RangeAdaptor<S>,
    B: RangeAdaptor<A::Output>,
{
    type Output = B::Output;

    fn adapt(&self, seq: S) -> Self::Output {
        self.second.adapt(self.first.adapt(seq))
    }
}

impl<T, H, Rhs> BitOr<Rhs> for AdaptorClosure<T, H> {
    type Output = AdaptorClosure<Chain<Self, Rhs>>;

    fn bitor(self, rhs: Rhs) -> Self::Output {
        AdaptorClosure::new(Chain {
            first: self,
            second: rhs,
        })
    }
}

impl<'a, T, H, Rhs> BitOr<Rhs> for &'a AdaptorClosure<T, H> {
    type Output = AdaptorClosure<Chain<Self, Rhs>>;

    fn bitor(self, rhs: Rhs) -> Self::Output {
        AdaptorClosure::new(Chain {
            first: self,
            second: rhs,
        })
    }
}

pub type EnumerateClosure = AdaptorClosure<Enumerate, Rebuilt<Enumerate>>;

/// The deferred form of [`crate::enumerate`].
pub fn enumerate() -> EnumerateClosure {
    AdaptorClosure::rebuilt()
}

/// Left-to-right application: `seq.pipe(adaptor)` is `adaptor.adapt(seq)`.
pub trait Pipe: Sized {
    fn pipe<A>(self, adaptor: A) -> A::Output
    where
        A: RangeAdaptor<Self>,
    {
        adaptor.adapt(self)
    }
}

impl<T> Pipe for T {}

impl<S, A> BitOr<A> for EnumerateView<S>
where
    A: RangeAdaptor<EnumerateView<S>>,
{
    type Output = A::Output;

    fn bitor(self, adaptor: A) -> Self::Output {
        adaptor.adapt(self)
    }
}

impl<I, A> BitOr<A> for SinglePass<I>
where
    A: RangeAdaptor<SinglePass<I>>,
{
    type Output = A::Output;

    fn bitor(self, adaptor: A) -> Self::Output {
        adaptor.adapt(self)
    }
}
