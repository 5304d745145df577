//! Classic containers for Rust, built on one shared red-black tree engine.
//!
//! This crate provides the ordered associative containers [`Set`], [`Multiset`],
//! and [`Map`], all backed by the same self-balancing binary search tree, plus
//! the sequential containers [`Vector`], [`List`], [`Array`], [`Stack`], and
//! [`Queue`]:
//!
//! - [`Set`] / [`Map`] - unique keys, `O(log n)` insert, lookup and removal
//! - [`Multiset`] - duplicate keys, kept in insertion order among equals
//! - [`Vector`] - growable contiguous buffer
//! - [`List`] - doubly-linked list with splice, merge, and sort
//! - [`Stack`] / [`Queue`] - LIFO and FIFO adapters over [`List`]
//!
//! # Example
//!
//! ```
//! use rubra::{Map, Set};
//!
//! let mut seen = Set::new();
//! seen.insert(5);
//! seen.insert(3);
//! seen.insert(8);
//!
//! // Iteration is always in ascending key order.
//! assert!(seen.iter().copied().eq([3, 5, 8]));
//!
//! let mut scores = Map::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//!
//! // Plain insert never overwrites; insert_or_assign does.
//! assert!(!scores.insert("Bob", 90));
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! scores.insert_or_assign("Bob", 90);
//! assert_eq!(scores.get(&"Bob"), Some(&90));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **One engine** - `Set`, `Multiset`, and `Map` are thin policy layers over a
//!   single arena-allocated red-black tree with a shared sentinel node
//! - **Cheap deep copies** - Cloning a container clones its arena; handles stay
//!   stable, so the copy is a fully independent node graph
//!
//! # Implementation
//!
//! The associative containers are implemented over a red-black tree whose nodes
//! live in an index-addressed arena. Every absent child slot points at a single
//! always-black sentinel node rather than holding a null reference, which removes
//! the null special cases from traversal and rebalancing code.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
// NOTE: We have to allow unsafe code for `Vector`'s manually managed buffer.
// #![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod array;
pub mod list;
pub mod map;
pub mod multiset;
pub mod queue;
pub mod set;
pub mod stack;
pub mod vector;

pub use array::Array;
pub use list::List;
pub use map::Map;
pub use multiset::Multiset;
pub use queue::Queue;
pub use set::Set;
pub use stack::Stack;
pub use vector::Vector;
