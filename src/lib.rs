#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod arena;
mod error;
pub mod linked_list;

extern crate alloc;

use core::num::NonZeroU32;

pub use error::ErrorKind;
pub use error::ListError;
pub use linked_list::IntoIter;
pub use linked_list::END;
pub use linked_list::Iter;
pub use linked_list::LinkedList;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
/// A handle to a slot in a list's node arena.
///
/// Handles are positional and **non-generational**: once a node is popped its
/// slot may be handed out again for a later insertion. The null handle plays
/// the role of "no node" at the end of the chain.
pub(crate) struct Ptr(Option<NonZeroU32>);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(index) => write!(f, "Ptr({})", index.get() - 1),
            None => write!(f, "Ptr(null)"),
        }
    }
}

impl Ptr {
    pub(crate) const fn null() -> Self {
        Ptr(None)
    }

    pub(crate) fn is_null(self) -> bool {
        self.0.is_none()
    }

    pub(crate) fn optional(self) -> Option<Self> {
        if self.is_null() { None } else { Some(self) }
    }

    pub(crate) fn or_else(self, other: impl FnOnce() -> Self) -> Self {
        if self.is_null() { other() } else { self }
    }

    /// Panics with "capacity overflow" once `index` no longer fits in a
    /// handle, which caps an arena at `u32::MAX` slots.
    pub(crate) fn from_index(index: usize) -> Self {
        match u32::try_from(index)
            .ok()
            .and_then(|index| NonZeroU32::new(index.wrapping_add(1)))
        {
            Some(index) => Ptr(Some(index)),
            None => capacity_overflow(),
        }
    }

    /// Panics on the null handle.
    pub(crate) fn unchecked_get(self) -> usize {
        match self.0 {
            Some(index) => index.get() as usize - 1,
            None => null_deref(),
        }
    }
}

#[cold]
#[inline(never)]
fn null_deref() -> ! {
    panic!("Attempted to dereference a null Ptr");
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
