//! Bidirectional ordered map for Rust.
//!
//! This crate provides [`Bimap`], an ordered one-to-one association between a
//! *left* key type and a *right* key type. Every pair `(L, R)` is stored
//! exactly once, both keys are unique on their own side, and the map can be
//! searched and traversed in sorted order from either side:
//!
//! - [`get_by_left`](Bimap::get_by_left) / [`get_by_right`](Bimap::get_by_right) -
//!   O(log n) lookup from either key to its partner
//! - [`iter_left`](Bimap::iter_left) / [`iter_right`](Bimap::iter_right) -
//!   ordered traversal of the pairs by left key or by right key
//! - [`LeftCursor::flip`](bimap::LeftCursor::flip) - O(1) navigation from a
//!   position in one ordering to the same pair's position in the other
//!
//! # Example
//!
//! ```
//! use bitreap::Bimap;
//!
//! let mut countries = Bimap::new();
//! countries.insert("FR", "France");
//! countries.insert("JP", "Japan");
//! countries.insert("NZ", "New Zealand");
//!
//! // Lookup works from either side.
//! assert_eq!(countries.get_by_left(&"JP"), Some(&"Japan"));
//! assert_eq!(countries.get_by_right(&"France"), Some(&"FR"));
//!
//! // A pair is rejected when either key is already present.
//! assert!(countries.insert("JP", "Jamaica").is_none());
//! assert_eq!(countries.len(), 3);
//!
//! // Traversal is ordered, independently on each side.
//! let codes: Vec<_> = countries.left_keys().copied().collect();
//! assert_eq!(codes, ["FR", "JP", "NZ"]);
//! ```
//!
//! # Implementation
//!
//! Both orderings are treaps - binary search trees balanced by random
//! priorities - built over a single arena of pair records. Each record holds
//! both keys and one set of tree links per side, so one allocation is a
//! member of both trees at once and cross-navigation between the orderings
//! is a constant-time handle rewrap rather than a search.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
// The arena/handle layout keeps every tree link an index, so no unsafe code
// is needed anywhere in the crate.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod raw;

pub mod bimap;

pub use bimap::Bimap;
