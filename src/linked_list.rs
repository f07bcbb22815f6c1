//! Singly-linked list implementation.
//!
//! This module provides the [`LinkedList`] type and its iterators. Nodes live
//! in a slot arena owned by the list and are chained through `next` handles,
//! so positional operations walk the chain from the head in O(n) while the
//! list itself never recurses on drop.
//!
//! Positions are `isize`. The marker [`END`] (`-1`) means "append" for
//! [`LinkedList::insert`] and "last element" for [`LinkedList::pop`] and
//! [`LinkedList::get`].
//!
//! # Examples
//!
//! ```
//! use chain_list::linked_list::LinkedList;
//!
//! let mut list = LinkedList::from(['a', 'b', 'c']);
//! list.insert('z', 1).unwrap();
//! assert_eq!(list.pop(chain_list::linked_list::END), Ok(Some('c')));
//!
//! let values: Vec<_> = list.iter().collect();
//! assert_eq!(values, [&'a', &'z', &'b']);
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::ops::IndexMut;

use crate::ListError;
use crate::Ptr;
use crate::arena::Arena;

mod cursor;
mod iter;

pub use iter::IntoIter;
pub use iter::Iter;
use iter::NodeIter;

/// Index marker resolving to the append position for insertion and to the
/// last element for removal and reads.
pub const END: isize = -1;

/// A singly-linked list whose nodes are stored in an arena owned by the list.
///
/// Every positional operation (`insert`, `pop`, `get`) walks the chain from
/// the head, so each costs O(n). `len` and `is_empty` are O(1).
///
/// Node handles are 32 bits wide: allocating a slot beyond `u32::MAX` panics
/// with "capacity overflow".
///
/// # Examples
///
/// ```
/// use chain_list::LinkedList;
///
/// let mut list: LinkedList<_> = "abcde".chars().collect();
/// assert_eq!(list.len(), 5);
///
/// let slice = list.get_range(1, Some(4), Some(2)).unwrap();
/// assert_eq!(slice.iter().collect::<String>(), "bd");
///
/// list.pop(0).unwrap();
/// assert_eq!(list.get(0), Ok(&'b'));
/// ```
pub struct LinkedList<T> {
    head: Ptr,
    len: usize,
    nodes: Arena<T>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates a new, empty list.
    ///
    /// The list will not allocate until the first element is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::LinkedList;
    ///
    /// let list: LinkedList<u8> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        LinkedList {
            head: Ptr::null(),
            len: 0,
            nodes: Arena::new(),
        }
    }

    /// Creates a new, empty list with room for `capacity` nodes before the
    /// node arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        LinkedList {
            head: Ptr::null(),
            len: 0,
            nodes: Arena::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// [`END`] (`-1`) appends. Any other index must lie in `0..=len`;
    /// inserting at `len` also appends.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] for negative indices other than
    /// [`END`] and for indices past `len`. The list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 3]);
    /// list.insert(0, 0).unwrap();
    /// list.insert(2, 2).unwrap();
    /// list.insert(4, -1).unwrap();
    /// assert_eq!(list, LinkedList::from([0, 1, 2, 3, 4]));
    ///
    /// assert!(list.insert(9, 10).is_err());
    /// assert_eq!(list.len(), 5);
    /// ```
    pub fn insert(&mut self, value: T, index: isize) -> Result<(), ListError> {
        let position = if index == END {
            self.len
        } else {
            match usize::try_from(index) {
                Ok(position) if position <= self.len => position,
                _ => return Err(self.out_of_range(index)),
            }
        };

        // Locate the splice point before allocating so a failed walk leaves
        // the list untouched.
        let after = if position == 0 {
            None
        } else if position == self.len {
            Some(self.expect_found(self.search_tail(), position - 1)?)
        } else {
            Some(self.expect_found(self.search_position(position - 1), position - 1)?)
        };

        self.link_after(after, value);
        tracing::trace!(position, len = self.len, "inserted node");
        Ok(())
    }

    /// Appends `value` at the end of the list.
    ///
    /// Equivalent to `insert(value, END)`, which cannot fail.
    pub fn push(&mut self, value: T) {
        let tail = self.search_tail().current;
        self.link_after(tail, value);
        tracing::trace!(position = self.len - 1, len = self.len, "inserted node");
    }

    /// Removes the element at `index` and returns it.
    ///
    /// [`END`] (`-1`) removes the last element. Popping from an empty list
    /// returns `Ok(None)` whatever the index.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] when the list is non-empty and
    /// `index` is neither [`END`] nor in `0..len`. The list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::LinkedList;
    ///
    /// let mut list = LinkedList::from(['a', 'b', 'c']);
    /// assert_eq!(list.pop(1), Ok(Some('b')));
    /// assert_eq!(list.pop(-1), Ok(Some('c')));
    /// assert_eq!(list.pop(5).unwrap_err().kind(), chain_list::ErrorKind::Index);
    ///
    /// let mut empty: LinkedList<char> = LinkedList::new();
    /// assert_eq!(empty.pop(-1), Ok(None));
    /// ```
    pub fn pop(&mut self, index: isize) -> Result<Option<T>, ListError> {
        if self.is_empty() {
            tracing::trace!(index, "pop on empty list");
            return Ok(None);
        }
        let position = self.resolve_existing(index)?;

        let found = self.search_position(position);
        let Some(target) = found.current else {
            tracing::warn!(position, len = self.len, "nothing to unlink at position");
            return Ok(None);
        };
        let removed = self.nodes.free(target);
        match found.previous {
            None => self.head = removed.next(),
            Some(previous) => *self.nodes.node_mut(previous).next_mut() = removed.next(),
        }

        self.len -= 1;
        tracing::trace!(position, len = self.len, "popped node");
        Ok(Some(removed.into_value()))
    }

    /// Removes and returns the last element, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 2]);
    /// assert_eq!(list.pop_last(), Some(2));
    /// assert_eq!(list.pop_last(), Some(1));
    /// assert_eq!(list.pop_last(), None);
    /// ```
    pub fn pop_last(&mut self) -> Option<T> {
        self.pop(END).ok().flatten()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// [`END`] (`-1`) refers to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] when `index` does not resolve
    /// into `0..len`, and [`ListError::BrokenChain`] if the chain ends before
    /// a validated position.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::LinkedList;
    ///
    /// let list = LinkedList::from([10, 20, 30]);
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(-1), Ok(&30));
    /// assert!(list.get(3).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T, ListError> {
        let position = self.resolve_existing(index)?;
        let ptr = self.expect_found(self.search_position(position), position)?;
        Ok(&self.nodes[ptr])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Accepts the same indices and fails the same way as
    /// [`LinkedList::get`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// *list.get_mut(-1).unwrap() *= 10;
    /// assert_eq!(list, LinkedList::from([1, 2, 30]));
    /// ```
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, ListError> {
        let position = self.resolve_existing(index)?;
        let ptr = self.expect_found(self.search_position(position), position)?;
        Ok(&mut self.nodes[ptr])
    }

    /// Returns a new list holding clones of the elements at positions
    /// `start`, `start + step`, ... below `stop`.
    ///
    /// `stop` defaults to `len` and `step` to `1`. The returned list shares
    /// no nodes with `self`.
    ///
    /// # Errors
    ///
    /// * [`ListError::IndexOutOfRange`] if `start` or `stop` is outside
    ///   `0..=len`.
    /// * [`ListError::InvalidStep`] if `step` is zero or
    ///   `stop - start < step`, which also rejects empty slices for a
    ///   positive step.
    ///
    /// A negative step selects by its magnitude, keeping chain order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::LinkedList;
    ///
    /// let list = LinkedList::from([0, 1, 2, 3, 4, 5]);
    ///
    /// let evens = list.get_range(0, None, Some(2)).unwrap();
    /// assert_eq!(evens, LinkedList::from([0, 2, 4]));
    ///
    /// let middle = list.get_range(2, Some(4), None).unwrap();
    /// assert_eq!(middle, LinkedList::from([2, 3]));
    ///
    /// let strided = list.get_range(0, Some(5), Some(-2)).unwrap();
    /// assert_eq!(strided, LinkedList::from([0, 2, 4]));
    ///
    /// assert!(list.get_range(3, Some(3), None).is_err());
    /// ```
    pub fn get_range(
        &self,
        start: isize,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<LinkedList<T>, ListError>
    where
        T: Clone,
    {
        let stop = stop.unwrap_or_else(|| isize::try_from(self.len).unwrap_or(isize::MAX));
        let step = step.unwrap_or(1);

        let first = self.resolve_bound(start)?;
        let end = self.resolve_bound(stop)?;
        if step == 0 || stop - start < step {
            return Err(ListError::InvalidStep { start, stop, step });
        }

        let slice: LinkedList<T> = self
            .iter()
            .skip(first)
            .take(end.saturating_sub(first))
            .step_by(step.unsigned_abs())
            .cloned()
            .collect();

        tracing::trace!(start, stop, step, selected = slice.len, "sliced list");
        Ok(slice)
    }

    /// Returns `true` if some element compares equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::LinkedList;
    ///
    /// let list = LinkedList::from([String::from("a"), String::from("b")]);
    /// assert!(list.contains(&String::from("b")));
    /// assert!(!list.contains(&String::from("c")));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.search(|_, node| node.value() == value).found()
    }

    /// Returns the position of the first element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::LinkedList;
    ///
    /// let list = LinkedList::from(['x', 'y', 'x']);
    /// assert_eq!(list.position_of(&'x'), Some(0));
    /// assert_eq!(list.position_of(&'y'), Some(1));
    /// assert_eq!(list.position_of(&'z'), None);
    /// ```
    pub fn position_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.search(|_, node| node.value() == value).position
    }

    /// Returns an iterator over the elements, front to back.
    ///
    /// Each call starts a new traversal from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.node_iter(),
        }
    }

    /// Removes every element.
    ///
    /// Keeps the allocated node storage for reuse.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clearing list");
        self.nodes.clear();
        self.head = Ptr::null();
        self.len = 0;
    }

    /// Releases spare node storage where possible.
    ///
    /// Slots freed by `pop` in the middle of the arena are kept for reuse.
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    pub(crate) fn node_iter(&self) -> NodeIter<'_, T> {
        NodeIter::new(self.head, self.len, &self.nodes)
    }

    /// Allocates `value` directly after `after`, or as the new head.
    fn link_after(&mut self, after: Option<Ptr>, value: T) -> Ptr {
        let ptr = match after {
            None => {
                self.head = self.nodes.alloc(value, self.head);
                self.head
            }
            Some(previous) => {
                let next = self.nodes.node(previous).next();
                let ptr = self.nodes.alloc(value, next);
                *self.nodes.node_mut(previous).next_mut() = ptr;
                ptr
            }
        };
        self.len += 1;
        ptr
    }

    /// Resolves an index that must name an existing element.
    fn resolve_existing(&self, index: isize) -> Result<usize, ListError> {
        let position = if index == END {
            self.len.checked_sub(1)
        } else {
            usize::try_from(index).ok().filter(|&position| position < self.len)
        };
        position.ok_or_else(|| self.out_of_range(index))
    }

    /// Resolves a slice bound, which may sit one past the last element.
    fn resolve_bound(&self, index: isize) -> Result<usize, ListError> {
        usize::try_from(index)
            .ok()
            .filter(|&position| position <= self.len)
            .ok_or_else(|| self.out_of_range(index))
    }

    fn out_of_range(&self, index: isize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::with_capacity(self.len);
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let ptr = self
            .search_position(index)
            .current
            .expect("index out of bounds");
        &self.nodes[ptr]
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let ptr = self
            .search_position(index)
            .current
            .expect("index out of bounds");
        &mut self.nodes[ptr]
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.search_tail().current;
        for value in iter {
            tail = Some(self.link_after(tail, value));
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            nodes: self.nodes,
            next: self.head,
            remaining: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
