//! Owned-copy text specialization
//!
//! A policy layer over the generic core for unbounded-length text payloads:
//! push borrows the caller's bytes, rejects oversized payloads before any
//! mutation, and stores an independently owned copy. The caller's buffer is
//! never aliased by the stack.

use crate::error::{StackError, StackResult};
use crate::stack::BoundedStack;

/// Per-element byte-size ceiling for text payloads. Payloads of this many
/// bytes or more are rejected. Rust strings carry no terminator, so the
/// count is the payload itself.
pub const MAX_ELEMENT_BYTE_SIZE: usize = 256;

/// Stack of owned text copies
///
/// # Example
/// ```
/// use cairn_stack::text::TextStack;
///
/// let mut stack = TextStack::new()?;
/// let caller_owned = String::from("borrowed, then copied");
/// stack.push(&caller_owned)?;
/// drop(caller_owned); // the stack's copy is independent
/// assert_eq!(stack.pop()?, "borrowed, then copied");
/// # Ok::<(), cairn_stack::StackError>(())
/// ```
#[derive(Debug)]
pub struct TextStack {
    inner: BoundedStack<String>,
}

impl TextStack {
    /// Creates an empty text stack
    pub fn new() -> StackResult<Self> {
        Ok(Self {
            inner: BoundedStack::new()?,
        })
    }

    /// Copies `text` into owned storage and pushes the copy
    ///
    /// Fails with [`StackError::ElementTooLarge`] for payloads of
    /// [`MAX_ELEMENT_BYTE_SIZE`] bytes or more, and with the generic core's
    /// errors otherwise; no failure mutates the stack.
    pub fn push(&mut self, text: &str) -> StackResult<()> {
        if text.len() >= MAX_ELEMENT_BYTE_SIZE {
            return Err(StackError::element_too_large(
                text.len(),
                MAX_ELEMENT_BYTE_SIZE,
            ));
        }

        let mut owned = String::new();
        owned
            .try_reserve_exact(text.len())
            .map_err(|_| StackError::out_of_memory(text.len()))?;
        owned.push_str(text);

        self.inner.push(owned)
    }

    /// Removes and returns the owned copy at the top of the stack
    pub fn pop(&mut self) -> StackResult<String> {
        self.inner.pop()
    }

    /// Borrows the top element without removing it
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.inner.peek().map(String::as_str)
    }

    /// Returns the number of live elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks if the stack holds no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Checks if the stack has reached the hard capacity ceiling
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Returns the current logical capacity
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the number of slots free before the next resize or rejection
    #[must_use]
    pub fn available(&self) -> usize {
        self.inner.available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_payload_rejected_before_mutation() {
        let mut stack = TextStack::new().expect("create failed");
        let oversized = "x".repeat(MAX_ELEMENT_BYTE_SIZE);

        let err = stack.push(&oversized).expect_err("push should fail");
        assert_eq!(
            err,
            StackError::ElementTooLarge {
                len: MAX_ELEMENT_BYTE_SIZE,
                max: MAX_ELEMENT_BYTE_SIZE,
            }
        );
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn boundary_payload_accepted() {
        let mut stack = TextStack::new().expect("create failed");
        let largest_allowed = "x".repeat(MAX_ELEMENT_BYTE_SIZE - 1);

        stack.push(&largest_allowed).expect("push failed");
        assert_eq!(stack.pop().expect("pop failed"), largest_allowed);
    }

    #[test]
    fn byte_length_counts_not_chars() {
        let mut stack = TextStack::new().expect("create failed");

        // 128 two-byte scalars: 128 chars but 256 bytes, so over the limit.
        let two_byte_chars = "é".repeat(128);
        assert_eq!(two_byte_chars.len(), MAX_ELEMENT_BYTE_SIZE);

        let err = stack.push(&two_byte_chars).expect_err("push should fail");
        assert_eq!(err.code(), "STACK:ELEMENT:TOO_LARGE");
    }
}
