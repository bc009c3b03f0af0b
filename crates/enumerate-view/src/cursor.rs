/**
 * @file cursor.rs
 * @author Krisna Pranav
 * @brief cursor
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use std::fmt;

/// The strongest way a cursor can move through its sequence.
///
/// Tiers are ordered, so `tier >= Traversal::Forward` reads as "at least
/// multi-pass".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Traversal {
    Input,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl Traversal {
    pub fn is_multi_pass(self) -> bool {
        self >= Traversal::Forward
    }

    pub fn can_retreat(self) -> bool {
        self >= Traversal::Bidirectional
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Traversal::Input => "input",
            Traversal::Forward => "forward",
            Traversal::Bidirectional => "bidirectional",
            Traversal::RandomAccess => "random-access",
        };

        f.write_str(name)
    }
} // impl fmt::Display for Traversal

/// A position in a sequence that can be read and stepped forward.
///
/// `get` lends the element for as long as the cursor stays borrowed, which
/// lets mutable cursors hand out `&mut` access one element at a time.
pub trait InputCursor {
    type Item<'a>
    where
        Self: 'a;

    const TRAVERSAL: Traversal = Traversal::Input;

    /// Reads the element under the cursor.
    ///
    /// # Panics
    ///
    /// Implementations may panic when the cursor sits at the end of its
    /// sequence.
    fn get(&mut self) -> Self::Item<'_>;

    fn advance(&mut self);
}

/// Multi-pass cursors: positions compare equal iff they denote the same
/// element of the same sequence.
pub trait ForwardCursor: InputCursor + PartialEq {}

pub trait BidirectionalCursor: ForwardCursor {
    fn retreat(&mut self);
}

pub trait RandomAccessCursor: BidirectionalCursor + PartialOrd {
    fn jump(&mut self, offset: isize);

    /// Number of forward steps from `origin` to `self`.
    fn distance_from(&self, origin: &Self) -> isize;
}

/// Marks the end of a sequence for cursors of type `C`.
///
/// One sentinel type may serve several cursor types, e.g. the read-only and
/// the mutable cursor over the same storage.
pub trait Sentinel<C: ?Sized> {
    fn is_end(&self, cursor: &C) -> bool;
}

/// Gives up write access, turning a mutable-mode position into the matching
/// read-only one.
pub trait IntoReadOnly {
    type ReadOnly;

    fn into_read_only(self) -> Self::ReadOnly;
}
