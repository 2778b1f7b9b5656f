//! Link nodes and freshly built sub-chains.
//!
//! A [`Node`] holds one value and an owning link to the next node. `next`
//! is `Option<Box<Node<T>>>`, so only a well-formed node (or the explicit
//! end-of-chain marker `None`) can ever be linked in; the validation the
//! structure needs is the type system itself. Owning links also make a
//! cycle unconstructible in safe code, so chain traversal always
//! terminates.

/// A single link in a chain.
///
/// Holds one value and exclusive ownership of the rest of the chain.
///
/// # Example
///
/// ```
/// use linked_collection::Node;
///
/// let mut first = Node::new(1);
/// first.set_next(Some(Node::boxed(2)));
///
/// assert_eq!(*first.data(), 1);
/// assert_eq!(first.next().map(|n| *n.data()), Some(2));
/// ```
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates an unlinked node holding `data`.
    #[inline]
    pub fn new(data: T) -> Self {
        Self { data, next: None }
    }

    /// Creates an unlinked, heap-allocated node holding `data`.
    ///
    /// Convenience for the form [`Collection::set_head`] and
    /// [`Node::set_next`] accept.
    ///
    /// [`Collection::set_head`]: crate::Collection::set_head
    #[inline]
    pub fn boxed(data: T) -> Box<Self> {
        Box::new(Self::new(data))
    }

    /// Returns a reference to the node's value.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the node's value.
    #[inline]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns a reference to the next node, or `None` at the end of the
    /// chain.
    #[inline]
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Returns a mutable reference to the next node, or `None` at the end
    /// of the chain.
    #[inline]
    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }

    /// Replaces the link to the next node, returning the previous sub-chain.
    ///
    /// Dropping a long detached sub-chain directly recurses one stack frame
    /// per node; hand it to a [`Collection`] or [`Chain`] if its length is
    /// unbounded.
    ///
    /// [`Collection`]: crate::Collection
    #[inline]
    pub fn set_next(&mut self, next: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        core::mem::replace(&mut self.next, next)
    }

    /// Detaches and returns the rest of the chain.
    #[inline]
    pub fn take_next(&mut self) -> Option<Box<Node<T>>> {
        self.next.take()
    }

    /// Consumes the node, returning its value and the rest of the chain.
    #[inline]
    pub fn into_parts(self) -> (T, Option<Box<Node<T>>>) {
        (self.data, self.next)
    }
}

/// A freshly linked sub-chain, not yet owned by a collection.
///
/// This is what [`Collection::chain`] returns: the head of a new chain plus
/// its element count. The tail is derived by traversal. An empty input
/// yields `head() == None`, `tail() == None`, `len() == 0`.
///
/// # Example
///
/// ```
/// use linked_collection::Chain;
///
/// let chain: Chain<u32> = [1, 2, 3].into_iter().collect();
///
/// assert_eq!(chain.len(), 3);
/// assert_eq!(chain.head().map(|n| *n.data()), Some(1));
/// assert_eq!(chain.tail().map(|n| *n.data()), Some(3));
/// ```
///
/// [`Collection::chain`]: crate::Collection::chain
#[derive(Debug)]
pub struct Chain<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Chain<T> {
    /// Creates an empty chain.
    #[inline]
    pub fn empty() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of nodes in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the first node, or `None` if empty.
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns a reference to the last node, or `None` if empty.
    ///
    /// Walks the chain; O(n).
    pub fn tail(&self) -> Option<&Node<T>> {
        let mut curr = self.head.as_deref()?;
        while let Some(next) = curr.next.as_deref() {
            curr = next;
        }
        Some(curr)
    }

    /// Consumes the chain, returning ownership of its head node.
    #[inline]
    pub fn into_head(mut self) -> Option<Box<Node<T>>> {
        self.head.take()
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<T> for Chain<T> {
    /// Links one node per element, in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut head = None;
        let mut len = 0;
        let mut cursor = &mut head;

        for data in iter {
            *cursor = Some(Node::boxed(data));
            len += 1;

            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        Self { head, len }
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        drop_chain(self.head.take());
    }
}

/// Tears down a chain link by link.
///
/// Detaching each node's `next` before dropping it keeps teardown
/// iterative; the default drop glue would recurse once per node.
pub(crate) fn drop_chain<T>(mut head: Option<Box<Node<T>>>) {
    while let Some(mut node) = head {
        head = node.take_next();
    }
}
