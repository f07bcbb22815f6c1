use core::iter::FusedIterator;

use crate::Ptr;
use crate::arena::Arena;
use crate::arena::Node;

/// Walks the chain one node at a time, yielding each node together with its
/// handle. Never handed out of the crate.
#[derive(Debug)]
pub(crate) struct NodeIter<'a, T> {
    next: Ptr,
    remaining: usize,
    nodes: &'a Arena<T>,
}

impl<'a, T> NodeIter<'a, T> {
    pub(crate) fn new(head: Ptr, len: usize, nodes: &'a Arena<T>) -> Self {
        NodeIter {
            next: head,
            remaining: len,
            nodes,
        }
    }
}

impl<T> Clone for NodeIter<'_, T> {
    fn clone(&self) -> Self {
        NodeIter {
            next: self.next,
            remaining: self.remaining,
            nodes: self.nodes,
        }
    }
}

impl<'a, T> Iterator for NodeIter<'a, T> {
    type Item = (Ptr, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.next.optional()?;
        let node = self.nodes.node(ptr);
        self.next = node.next();
        self.remaining = self.remaining.saturating_sub(1);
        Some((ptr, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[derive(Debug)]
/// An iterator over the values of a `LinkedList`, front to back.
///
/// This struct is created by the [`iter`] method on [`LinkedList`]. Every
/// call to [`iter`] starts a fresh traversal from the head.
///
/// [`iter`]: crate::LinkedList::iter
/// [`LinkedList`]: crate::LinkedList
///
/// # Examples
///
/// ```
/// use chain_list::LinkedList;
///
/// let list = LinkedList::from(["a", "b", "c"]);
///
/// let mut iter = list.iter();
/// assert_eq!(iter.next(), Some(&"a"));
/// assert_eq!(iter.len(), 2);
/// assert_eq!(iter.collect::<Vec<_>>(), [&"b", &"c"]);
/// ```
pub struct Iter<'a, T> {
    pub(crate) nodes: NodeIter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|(_, node)| node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[derive(Debug)]
/// An owning iterator over the values of a `LinkedList`.
///
/// This struct is created by the [`into_iter`] method on [`LinkedList`]
/// (provided by the [`IntoIterator`] trait). Each slot is released as its
/// value is yielded.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
/// [`LinkedList`]: crate::LinkedList
///
/// # Examples
///
/// ```
/// use chain_list::LinkedList;
///
/// let list = LinkedList::from([String::from("x"), String::from("y")]);
///
/// let owned: Vec<String> = list.into_iter().collect();
/// assert_eq!(owned, ["x", "y"]);
/// ```
pub struct IntoIter<T> {
    pub(crate) nodes: Arena<T>,
    pub(crate) next: Ptr,
    pub(crate) remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.next.optional()?;
        let node = self.nodes.free(ptr);
        self.next = node.next();
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.into_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
