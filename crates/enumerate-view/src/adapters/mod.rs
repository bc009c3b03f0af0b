/**
 * @file mod.rs
 * @author Krisna Pranav
 * @brief adapters
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

pub mod closure;
pub mod enumerate;

pub use closure::{
    AdaptorClosure, Chain, Enumerate, EnumerateClosure, FnAdaptor, Pipe, RangeAdaptor,
};
pub use enumerate::{EnumerateCursor, EnumerateEnd, EnumerateView};
