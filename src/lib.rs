//! A small collections crate built around injected ordering.
//!
//! # Purpose
//! Rust's [`std`] already ships a heap and binary search, but both are welded to the [`Ord`] trait.
//! The two components here take the ordering as a value instead: [`Heap`](collections::heap::Heap)
//! keeps whatever comparator you hand it at construction, and
//! [`BoundarySearch`](collections::search::BoundarySearch) searches any slice that is partitioned
//! by a predicate you supply per call. Nothing in this crate requires an element type to know how
//! to order itself.
//!
//! # Method
//! Both components are deliberately thin over [`Vec`] and `[T]`. The heap stores its implicit tree
//! in a flat `Vec<T>` with index arithmetic for parent/child links - the cache-friendly layout is
//! the point, so there are no node structs and no pointers. The search utilities are an extension
//! trait over slices rather than a wrapper type, because the input is just data the caller already
//! owns.
//!
//! # Error Handling
//! Absence is not an error here. Popping or peeking an empty heap and searching with a predicate
//! that never holds all answer [`None`]. The one operation that can genuinely fail is
//! [`Heap::try_reserve`](collections::heap::Heap::try_reserve), which reports a strongly-typed
//! [`CapacityOverflow`](collections::heap::CapacityOverflow) rather than panicking.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. Everything else is `std`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

#[cfg(test)]
pub(crate) mod util;
