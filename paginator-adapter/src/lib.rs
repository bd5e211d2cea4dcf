//! Adapter utilities for the `paginator` crate.
//!
//! The `paginator` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides the small, framework-neutral layer commonly
//! needed on top of it:
//!
//! - An item buffer sliced by the display limit on every render
//! - Single-flight fetch bookkeeping (one outstanding request, retry on
//!   failure)
//! - End-of-data tracking from short batches
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings) and
//! transport-agnostic: it never fetches, it only tells the caller what to
//! fetch.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod list;


pub use list::{InfiniteList, LoadState};
