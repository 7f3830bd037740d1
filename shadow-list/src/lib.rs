//! A headless windowing engine for fixed-height lists.
//!
//! For adapter-level utilities (scroll tracking, list origin, the render contract), see the
//! `shadow-list-adapter` crate.
//!
//! The engine keeps a "shadow" of the real list's geometry: cumulative offsets for every item,
//! the total content height, and the contiguous window of items that overlaps the padded viewport
//! at the current scroll offset. A renderer materializes only that window.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport height
//! - scroll offset
//! - item count and the uniform item height
//!
//! ```rust
//! use shadow_list::{ShadowList, ShadowListOptions};
//!
//! // 1000 rows, 20px each, in a 100px viewport.
//! let mut list = ShadowList::new(ShadowListOptions::new(1_000, 20, 100));
//! assert_eq!(list.total_height(), 20_000);
//!
//! list.move_scroll_offset(400);
//! let range = list.visible_range();
//! assert!(range.contains(20) && range.contains(24));
//!
//! for item in list.visible_items() {
//!     // Place a row of `item.height` at `item.offset`.
//!     let _ = (item.index, item.offset, item.height);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod offsets;
mod options;
mod shadow_list;
mod state;
mod types;


pub use options::{OnChangeCallback, ShadowListOptions};
pub use shadow_list::ShadowList;
pub use state::ViewportState;
pub use types::{ShadowItem, VisibleRange};
