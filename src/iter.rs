//! Lazy chain traversal.
//!
//! Every iterator here is a cursor holding the current node and advancing
//! one link per pull; nothing is materialized up front. Traversal is
//! restartable: each call to [`Collection::iter`], [`Collection::nodes`],
//! or [`Collection::iter_mut`] starts a fresh, independent walk from head.
//!
//! [`Collection::iter`]: crate::Collection::iter
//! [`Collection::nodes`]: crate::Collection::nodes
//! [`Collection::iter_mut`]: crate::Collection::iter_mut

use core::iter::FusedIterator;

use crate::node::{drop_chain, Node};
use crate::Collection;

/// Iterator over node references, head to tail.
///
/// Created by [`Collection::nodes`].
///
/// [`Collection::nodes`]: crate::Collection::nodes
#[derive(Debug)]
pub struct Nodes<'a, T> {
    curr: Option<&'a Node<T>>,
}

impl<'a, T> Nodes<'a, T> {
    #[inline]
    pub(crate) fn new(head: Option<&'a Node<T>>) -> Self {
        Self { curr: head }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?;
        self.curr = node.next.as_deref();
        Some(node)
    }
}

impl<T> FusedIterator for Nodes<'_, T> {}

impl<T> Clone for Nodes<'_, T> {
    fn clone(&self) -> Self {
        Self { curr: self.curr }
    }
}

/// Iterator over value references, head to tail.
///
/// Created by [`Collection::iter`]; also the collection's default
/// borrowed iteration.
///
/// [`Collection::iter`]: crate::Collection::iter
#[derive(Debug)]
pub struct Iter<'a, T> {
    curr: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(head: Option<&'a Node<T>>) -> Self {
        Self { curr: head }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?;
        self.curr = node.next.as_deref();
        Some(&node.data)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { curr: self.curr }
    }
}

/// Iterator over mutable value references, head to tail.
///
/// Created by [`Collection::iter_mut`].
///
/// [`Collection::iter_mut`]: crate::Collection::iter_mut
#[derive(Debug)]
pub struct IterMut<'a, T> {
    curr: Option<&'a mut Node<T>>,
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    pub(crate) fn new(head: Option<&'a mut Node<T>>) -> Self {
        Self { curr: head }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr.take()?;
        self.curr = node.next.as_deref_mut();
        Some(&mut node.data)
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Consuming iterator over values, head to tail.
///
/// Takes ownership of the chain; each pull unlinks and yields one node's
/// value. Dropping the iterator mid-walk tears down the remaining chain
/// iteratively.
#[derive(Debug)]
pub struct IntoIter<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) fn new(head: Option<Box<Node<T>>>) -> Self {
        Self { head }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.head.take()?;
        let Node { data, next } = *node;
        self.head = next;
        Some(data)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        drop_chain(self.head.take());
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the collection, yielding values in chain order.
    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.head.take())
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Collection<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
