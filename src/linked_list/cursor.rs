use crate::ListError;
use crate::Ptr;
use crate::arena::Node;
use crate::linked_list::LinkedList;

/// Outcome of walking the chain to the first node matching a predicate.
///
/// `previous` is `None` when the match is the head or when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchResult {
    pub(crate) previous: Option<Ptr>,
    pub(crate) current: Option<Ptr>,
    pub(crate) position: Option<usize>,
}

impl SearchResult {
    pub(crate) const NOT_FOUND: SearchResult = SearchResult {
        previous: None,
        current: None,
        position: None,
    };

    pub(crate) fn found(&self) -> bool {
        self.current.is_some()
    }
}

impl<T> LinkedList<T> {
    /// Walks from the head and stops at the first `(position, node)` accepted
    /// by `predicate`.
    pub(crate) fn search<F>(&self, mut predicate: F) -> SearchResult
    where
        F: FnMut(usize, &Node<T>) -> bool,
    {
        let mut previous = None;
        for (position, (ptr, node)) in self.node_iter().enumerate() {
            if predicate(position, node) {
                return SearchResult {
                    previous,
                    current: Some(ptr),
                    position: Some(position),
                };
            }
            previous = Some(ptr);
        }
        SearchResult::NOT_FOUND
    }

    pub(crate) fn search_position(&self, position: usize) -> SearchResult {
        self.search(|at, _| at == position)
    }

    pub(crate) fn search_tail(&self) -> SearchResult {
        self.search(|_, node| node.next().is_null())
    }

    /// Resolves a search that bounds checking already guaranteed must hit.
    pub(crate) fn expect_found(
        &self,
        result: SearchResult,
        position: usize,
    ) -> Result<Ptr, ListError> {
        result.current.ok_or_else(|| {
            tracing::error!(position, len = self.len, "chain shorter than recorded length");
            ListError::BrokenChain { position }
        })
    }
}
