//! # cairn-stack
//!
//! Bounded LIFO stack with adaptive capacity management.
//!
//! The stack owns a contiguous, resizable buffer of elements bounded by a
//! hard capacity ceiling. Pushing into an exhausted buffer doubles it up to
//! the ceiling; popping below quarter occupancy halves it down to the
//! initial size. Every operation is synchronous, single-threaded, and
//! reports failure as a value.
//!
//! ## Quick Start
//!
//! ```rust
//! use cairn_stack::prelude::*;
//!
//! fn main() -> StackResult<()> {
//!     let mut stack = BoundedStack::new()?;
//!     stack.push(7)?;
//!     stack.push(11)?;
//!     assert_eq!(stack.pop()?, 11);
//!
//!     // Text payloads are copied into storage the stack owns outright.
//!     let mut texts = TextStack::new()?;
//!     texts.push("transient caller data")?;
//!     assert_eq!(texts.pop()?, "transient caller data");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `logging` (default): trace/warn diagnostics on the resize and
//!   rejection paths via `tracing`
//!
//! ## Architecture
//!
//! - [`stack`] — the generic capacity-managed core, [`BoundedStack`]
//! - [`text`] — owned-copy specialization for text payloads, [`TextStack`]
//! - [`error`] — standalone error handling, [`StackError`]
//!
//! The contract constants ([`INITIAL_CAPACITY`], [`MAX_CAPACITY`],
//! [`MAX_ELEMENT_BYTE_SIZE`]) are compile-time and process-wide; nothing is
//! configurable per instance.

// Error types
pub mod error;

// Core modules
pub mod stack;
pub mod text;

// Re-export core types for convenience
pub use crate::error::{StackError, StackResult};
pub use crate::stack::{BoundedStack, INITIAL_CAPACITY, MAX_CAPACITY};
pub use crate::text::{MAX_ELEMENT_BYTE_SIZE, TextStack};

pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::error::{StackError, StackResult};
    pub use crate::stack::{BoundedStack, INITIAL_CAPACITY, MAX_CAPACITY};
    pub use crate::text::{MAX_ELEMENT_BYTE_SIZE, TextStack};
}
