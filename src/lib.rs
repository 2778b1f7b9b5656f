//! A minimal owned singly-linked collection.
//!
//! This crate provides [`Collection`], a singly-linked list built from
//! heap-owned [`Node`] links, with head/tail access, derived length, and
//! lazy, restartable traversal.
//!
//! # Design Philosophy
//!
//! The collection stores exactly one thing: an optional owning link to the
//! head node. Everything else is derived by walking the chain:
//!
//! ```text
//! Collection ──head──> Node ──next──> Node ──next──> Node ──next──> (end)
//! ```
//!
//! - **Exclusive ownership**: `next` is an owning `Box` link, so a chain has
//!   exactly one owner and cloning a collection necessarily allocates fresh
//!   nodes. Two collections never share nodes unless the caller moves a
//!   chain between them explicitly.
//! - **Derived views**: `tail` and `len` are computed by traversal (O(n)),
//!   never cached. The collection cannot go stale against its own chain.
//! - **Lazy traversal**: [`Collection::iter`] and [`Collection::nodes`]
//!   produce elements on demand from a fresh cursor; no intermediate array
//!   is materialized, and every call starts an independent walk.
//! - **Static node validation**: only `Option<Box<Node<T>>>` can be linked
//!   into a chain. The "is this a well-formed node" check is the type
//!   system, not a runtime test.
//! - **Acyclic by construction**: owning links cannot form a cycle in safe
//!   code, so traversal always terminates.
//!
//! # Quick Start
//!
//! ```
//! use linked_collection::Collection;
//!
//! let mut list: Collection<u64> = Collection::new();
//! assert!(list.is_empty());
//!
//! // Bulk append builds a sub-chain and links it after the current tail.
//! list.append([1, 2, 3]);
//! list.append([4, 5]);
//!
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(list.len(), 5);
//! assert_eq!(list.peek(), Some(&1));
//! assert_eq!(list.tail().map(|node| *node.data()), Some(5));
//!
//! // Traversal is lazy and restartable.
//! let doubled: Vec<u64> = list.iter().map(|v| v * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
//! assert_eq!(list.iter().count(), 5);
//!
//! list.clear();
//! assert!(list.is_empty());
//! ```
//!
//! # Cloning
//!
//! [`Collection::clone`] performs a structural copy: one fresh node per
//! element, relinked in order. Mutating the clone's links never affects the
//! source.
//!
//! ```
//! use linked_collection::Collection;
//!
//! let source: Collection<u32> = [1, 2].into_iter().collect();
//! let mut copy = source.clone();
//!
//! // Detach everything after the copy's head.
//! copy.head_mut().unwrap().set_next(None);
//!
//! assert_eq!(copy.to_vec(), vec![1]);
//! assert_eq!(source.to_vec(), vec![1, 2]);
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Collection`] as a value
//!   sequence

#![warn(missing_docs)]

pub mod collection;
pub mod iter;
pub mod node;

pub use collection::{Collection, Options};
pub use iter::{IntoIter, Iter, IterMut, Nodes};
pub use node::{Chain, Node};
