//! A headless infinite-pagination engine inspired by the infinite-query
//! patterns of TanStack Query.
//!
//! For buffer and fetch-lifecycle utilities (single-flight requests,
//! exhaustion tracking), see the `paginator-adapter` crate.
//!
//! This crate focuses on the core arithmetic of "load more" lists: a
//! monotonically advancing page counter and the two values derived from it on
//! every access:
//!
//! - `offset`: where the next fetch should start, corrected by a one-time
//!   `bias` for items already in hand before pagination began
//! - `display_limit`: how many already-fetched items the UI may render,
//!   applied to caller-owned data with the pure functions in [`slice`]
//!
//! It is UI- and transport-agnostic. An adapter layer is expected to provide:
//! - the trigger that calls [`Paginator::advance`] (a button, a
//!   viewport-intersection signal)
//! - the fetch itself, driven by the returned [`PageRequest`]
//! - item storage, sliced for rendering via [`Paginator::visible`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod paginator;
pub mod slice;
mod state;
mod types;


pub use options::{AdvisoryCallback, InitialPage, OnChangeCallback, PaginatorOptions};
pub use paginator::Paginator;
pub use state::PaginatorState;
pub use types::{BiasAdvisory, PageRequest, PageWindow};
