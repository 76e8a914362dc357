//! Sorted maps with live range views for Rust.
//!
//! This crate provides [`SortedMap`], an ordered map whose range views
//! ([`sub_map`](SortedMap::sub_map), [`head_map`](SortedMap::head_map),
//! [`tail_map`](SortedMap::tail_map)) are not copies: every view is another
//! handle onto the same storage, restricted to a key window.
//!
//! - Writes through a view are visible through the parent and every sibling.
//! - Views nest: a view of a view still shares the original storage.
//! - Bounds are inclusive on both ends.
//!
//! # Example
//!
//! ```
//! use sortedmap::SortedMap;
//!
//! let scores = SortedMap::new();
//! scores.put("alice", 100);
//! scores.put("bob", 85);
//! scores.put("carol", 92);
//!
//! assert_eq!(scores.first_key(), Some("alice"));
//! assert_eq!(scores.last_key(), Some("carol"));
//!
//! // A window over the same entries.
//! let early = scores.head_map("bob").unwrap();
//! early.put("bob", 90);
//! assert_eq!(scores.get("bob"), Some(90));
//! assert_eq!(early.get("carol"), None);
//! ```
//!
//! # Implementation
//!
//! Storage is split in two. Keys live in an order index, a sorted vector
//! searched by bisection. Values live in a second vector kept parallel to
//! it, so a key's position is also its value's position. A key is in the
//! map exactly when the order index holds it; the two vectors disagreeing
//! in length is treated as corruption and panics.
//!
//! Handles share storage through `Rc<RefCell<_>>`, so `SortedMap` is neither
//! `Send` nor `Sync`.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod error;
mod raw;

pub mod sorted_map;

pub use error::ViewError;
pub use sorted_map::SortedMap;
