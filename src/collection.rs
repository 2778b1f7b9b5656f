//! The collection: an owned singly-linked chain with derived views.
//!
//! [`Collection`] stores an optional owning link to the head node; tail,
//! length, and every traversal are derived by walking from head. Bulk
//! conversion goes through [`Chain`], the same sub-chain builder the static
//! constructors use.
//!
//! # Ownership Invariant
//!
//! A collection exclusively owns its chain, transitively through each
//! node's `next` link. [`Collection::clone`] therefore allocates fresh
//! nodes; two collections only share nodes if the caller moves a chain out
//! of one (via [`Collection::take_head`] or [`Node::take_next`]) and links
//! it into the other.
//!
//! # Example
//!
//! ```
//! use linked_collection::Collection;
//!
//! let mut list: Collection<&str> = Collection::new();
//! list.append(["a", "b"]).append(["c"]);
//!
//! assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.peek(), Some(&"a"));
//! ```

use core::fmt;

use crate::iter::{Iter, IterMut, Nodes};
use crate::node::{drop_chain, Chain, Node};

/// Opaque configuration bag for a [`Collection`].
///
/// Stored verbatim and propagated to clones by default; the core never
/// interprets it. The label, when set, replaces the default name in the
/// [`Display`](fmt::Display) rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Display name for diagnostics. Defaults to `"Collection"`.
    pub label: Option<String>,
}

/// An owned singly-linked collection.
///
/// Only the head link is stored; everything else is derived by traversal.
/// See the [crate-level docs](crate) for the design rationale.
///
/// # Example
///
/// ```
/// use linked_collection::Collection;
///
/// let mut list: Collection<u64> = [1, 2, 3].into_iter().collect();
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.tail().map(|n| *n.data()), Some(3));
///
/// list.clear();
/// assert!(list.is_empty());
/// ```
pub struct Collection<T> {
    pub(crate) head: Option<Box<Node<T>>>,
    options: Options,
}

impl<T> Collection<T> {
    /// Creates an empty collection with default options.
    #[inline]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Creates an empty collection with the given options.
    #[inline]
    pub fn with_options(options: Options) -> Self {
        Self {
            head: None,
            options,
        }
    }

    /// Returns the collection's options.
    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns a reference to the head node, or `None` if empty.
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns a mutable reference to the head node, or `None` if empty.
    #[inline]
    pub fn head_mut(&mut self) -> Option<&mut Node<T>> {
        self.head.as_deref_mut()
    }

    /// Replaces the root of the chain.
    ///
    /// The previous chain, if any, is torn down iteratively. Use
    /// [`take_head`](Self::take_head) to keep it instead.
    ///
    /// Only a node (or `None`) can become the head; anything else is a
    /// compile error:
    ///
    /// ```compile_fail
    /// use linked_collection::Collection;
    ///
    /// let mut list: Collection<u32> = Collection::new();
    /// list.set_head(Some(Box::new("not a node")));
    /// ```
    pub fn set_head(&mut self, node: Option<Box<Node<T>>>) -> &mut Self {
        let old = core::mem::replace(&mut self.head, node);
        drop_chain(old);
        self
    }

    /// Detaches and returns the entire chain, leaving the collection empty.
    #[inline]
    pub fn take_head(&mut self) -> Option<Box<Node<T>>> {
        self.head.take()
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

    /// Returns a mutable reference to the last node, or `None` if empty.
    ///
    /// Walks the chain; O(n).
    pub fn tail_mut(&mut self) -> Option<&mut Node<T>> {
        let mut curr = self.head.as_deref_mut()?;
        while curr.next.is_some() {
            curr = curr.next.as_deref_mut().expect("next is present");
        }
        Some(curr)
    }

    /// Returns the number of nodes in the chain.
    ///
    /// Counts from head; O(n).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// Returns `true` if the collection has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the head node's value, or `None` if empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.data)
    }

    /// Returns a mutable reference to the head node's value, or `None` if
    /// empty.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.data)
    }

    /// Removes all nodes.
    ///
    /// Teardown is iterative, so clearing an arbitrarily long chain cannot
    /// overflow the stack. Returns the collection for chaining.
    pub fn clear(&mut self) -> &mut Self {
        drop_chain(self.head.take());
        self
    }

    /// Returns an iterator over node references, head to tail.
    ///
    /// Each call starts a fresh, independent walk.
    #[inline]
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self.head.as_deref())
    }

    /// Returns an iterator over value references, head to tail.
    ///
    /// Each call starts a fresh, independent walk.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref())
    }

    /// Returns an iterator over mutable value references, head to tail.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut())
    }

    /// Invokes `f(value, index, collection)` for each value in chain order.
    ///
    /// The index is zero-based. Returns the collection for chaining.
    pub fn for_each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&T, usize, &Self),
    {
        for (index, value) in self.iter().enumerate() {
            f(value, index, self);
        }
        self
    }

    /// Appends every value from `values` after the current tail.
    ///
    /// Builds one node per value, in iteration order, and links the new
    /// sub-chain after the tail (or makes it the head when the collection
    /// is empty). This is an append, not a replace. Returns the collection
    /// for chaining.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_collection::Collection;
    ///
    /// let mut list: Collection<u32> = Collection::new();
    /// list.append([1, 2, 3]).append([4, 5]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn append<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let chain: Chain<T> = values.into_iter().collect();
        if chain.is_empty() {
            return self;
        }

        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = chain.into_head();
        self
    }

    /// Materializes the chain into a `Vec`, head to tail.
    ///
    /// Each call produces an independent `Vec`; O(n).
    #[inline]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Structurally copies the collection under different options.
    ///
    /// Allocates one fresh node per element and relinks them in source
    /// order; no node is shared with the source. An empty source yields an
    /// empty clone.
    pub fn clone_with(&self, options: Options) -> Self
    where
        T: Clone,
    {
        let mut clone = Self::with_options(options);
        clone.append(self.iter().cloned());
        clone
    }

    /// Links `values` into a fresh sub-chain without constructing a
    /// collection.
    ///
    /// Returns the [`Chain`] record: head, derived tail, and length.
    #[inline]
    pub fn chain<I>(values: I) -> Chain<T>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().collect()
    }

    /// Constructs a collection with the given options and appends `values`.
    ///
    /// Equivalent to `Collection::with_options(options)` followed by
    /// [`append`](Self::append).
    pub fn from_iter_with<I>(values: I, options: Options) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut collection = Self::with_options(options);
        collection.append(values);
        collection
    }

    /// Prints the `Debug` rendering to stderr and returns the collection.
    ///
    /// Diagnostic helper only; the output format carries no stability
    /// guarantee.
    pub fn log(&self) -> &Self
    where
        T: fmt::Debug,
    {
        eprintln!("{} {:?}", self, self);
        self
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Collection<T> {
    fn drop(&mut self) {
        drop_chain(self.head.take());
    }
}

impl<T: Clone> Clone for Collection<T> {
    /// Structural copy using the source's own options.
    fn clone(&self) -> Self {
        self.clone_with(self.options.clone())
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_iter_with(values, Options::default())
    }
}

impl<T> Extend<T> for Collection<T> {
    /// Appends after the current tail, matching [`Collection::append`].
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.append(values);
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for Collection<T> {
    /// Renders as `[<label> nodes:<len>]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.options.label.as_deref().unwrap_or("Collection");
        write!(f, "[{label} nodes:{}]", self.len())
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    /// Elementwise equality in chain order; options do not participate.
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Collection<T> {}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Collection<T> {
    /// Serializes as a sequence of values; options are transient
    /// configuration and are not serialized.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Collection<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}
