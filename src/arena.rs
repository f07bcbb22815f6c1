use alloc::vec::Vec;
use core::ops::{
    Index,
    IndexMut,
};

use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_free() -> ! {
    panic!("Attempted to access data of free slot");
}

#[derive(Debug, Clone, Copy)]
enum ValueOrFree<T> {
    Free,
    Value(T),
}

/// One cell of the chain.
///
/// For an occupied slot `next` is the following node of the list. For a free
/// slot it links to the next free slot instead.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node<T> {
    next: Ptr,
    data: ValueOrFree<T>,
}

impl<T> Node<T> {
    pub(crate) fn next(&self) -> Ptr {
        self.next
    }

    pub(crate) fn next_mut(&mut self) -> &mut Ptr {
        &mut self.next
    }

    pub(crate) fn value(&self) -> &T {
        match &self.data {
            ValueOrFree::Value(value) => value,
            ValueOrFree::Free => assert_free(),
        }
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        match &mut self.data {
            ValueOrFree::Value(value) => value,
            ValueOrFree::Free => assert_free(),
        }
    }

    pub(crate) fn into_value(self) -> T {
        match self.data {
            ValueOrFree::Value(value) => value,
            ValueOrFree::Free => assert_free(),
        }
    }
}

/// Slot storage for the nodes of one list.
///
/// Freed slots are threaded onto an intrusive free list and handed out again
/// before the backing `Vec` grows.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    nodes: Vec<Node<T>>,
    free_head: Ptr,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            nodes: Vec::new(),
            free_head: Ptr::null(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            nodes: Vec::with_capacity(capacity),
            free_head: Ptr::null(),
        }
    }

    pub(crate) fn node(&self, ptr: Ptr) -> &Node<T> {
        &self.nodes[ptr.unchecked_get()]
    }

    pub(crate) fn node_mut(&mut self, ptr: Ptr) -> &mut Node<T> {
        &mut self.nodes[ptr.unchecked_get()]
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free_head = Ptr::null();
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        // Occupied slots cannot move without rewriting every handle that
        // points at them, so trailing capacity is all that can be released.
        self.nodes.shrink_to_fit();
    }

    /// The handle the next call to [`Arena::alloc`] will return.
    pub(crate) fn next_ptr(&self) -> Ptr {
        self.free_head.or_else(|| Ptr::from_index(self.nodes.len()))
    }

    pub(crate) fn alloc(&mut self, value: T, next: Ptr) -> Ptr {
        let ptr = self.next_ptr();
        let node = Node {
            next,
            data: ValueOrFree::Value(value),
        };
        if self.free_head.is_null() {
            self.nodes.push(node);
        } else {
            let old = core::mem::replace(&mut self.nodes[ptr.unchecked_get()], node);
            self.free_head = old.next;
        }
        ptr
    }

    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        if ptr.is_null() {
            return false;
        }
        matches!(self.nodes[ptr.unchecked_get()].data, ValueOrFree::Value(_))
    }

    /// Releases the slot and returns the node it held, including its `next`
    /// link at the time of release.
    pub(crate) fn free(&mut self, ptr: Ptr) -> Node<T> {
        assert!(self.is_occupied(ptr), "Pointer to free must be occupied");
        let result = core::mem::replace(
            &mut self.nodes[ptr.unchecked_get()],
            Node {
                next: self.free_head,
                data: ValueOrFree::Free,
            },
        );
        self.free_head = ptr;

        result
    }

    #[cfg(test)]
    pub(crate) fn occupied(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node.data, ValueOrFree::Value(_)))
            .count()
    }

    #[cfg(test)]
    pub(crate) fn slots(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> Index<Ptr> for Arena<T> {
    type Output = T;

    fn index(&self, index: Ptr) -> &Self::Output {
        self.nodes[index.unchecked_get()].value()
    }
}

impl<T> IndexMut<Ptr> for Arena<T> {
    fn index_mut(&mut self, index: Ptr) -> &mut Self::Output {
        self.nodes[index.unchecked_get()].value_mut()
    }
}
