//! Adapter utilities for the `shadow-list` crate.
//!
//! The `shadow-list` crate is UI-agnostic and focuses on the geometry. This crate provides
//! small, framework-neutral helpers commonly needed by adapters:
//!
//! - Scroll tracking: `is_scrolling`, scroll direction, and the debounced scroll-end reset
//! - List origin: lists that sit inside a larger scrolled container
//! - The render contract: absolute row placements handed to an [`ItemRenderer`]
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod render;
mod scroll;


pub use controller::Controller;
pub use render::{ItemPlacement, ItemRenderer};
pub use scroll::{DEFAULT_SCROLL_RESET_DELAY_MS, ScrollDirection, ScrollTracker};
