//! Bounded LIFO stack core
//!
//! ## Invariants
//!
//! - `INITIAL_CAPACITY <= capacity <= MAX_CAPACITY` after every operation
//! - `count <= capacity` (count is `items.len()`)
//! - Growth and shrink are exact factor-of-2 steps; arithmetic is integer
//!   (floor) division
//! - A failed operation leaves buffer, capacity, and count untouched
//! - Reallocation preserves all live elements in order at their indices

use crate::error::{StackError, StackResult};

#[cfg(feature = "logging")]
use tracing::trace;

/// Number of slots a freshly created stack reserves; also the floor the
/// capacity may shrink to.
pub const INITIAL_CAPACITY: usize = 16;

/// Hard ceiling the capacity may never cross.
pub const MAX_CAPACITY: usize = 32768;

/// Dynamically-resized LIFO stack with a hard capacity ceiling
///
/// The stack owns a contiguous buffer of elements and resizes it as the
/// element count moves:
///
/// ```text
/// capacity:  16 --x2--> 32 --x2--> ... --x2--> 32768 (ceiling: push fails)
///            16 <--/2-- 32 <--/2-- ...         (when count < capacity / 4)
/// ```
///
/// "Full" means the hard ceiling has been reached, not merely that the
/// current buffer is exhausted; a buffer exhausted below the ceiling grows
/// instead of reporting full.
///
/// # Example
/// ```
/// use cairn_stack::stack::BoundedStack;
///
/// let mut stack = BoundedStack::new()?;
/// stack.push("alpha")?;
/// stack.push("beta")?;
/// assert_eq!(stack.pop()?, "beta");
/// assert_eq!(stack.pop()?, "alpha");
/// # Ok::<(), cairn_stack::StackError>(())
/// ```
#[derive(Debug)]
pub struct BoundedStack<T> {
    /// Owned element storage; its length is the live count.
    items: Vec<T>,
    /// Logical slot count driving the resize policy. Kept separate from the
    /// buffer's own capacity, which is only a lower-bound guarantee.
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack with `INITIAL_CAPACITY` slots reserved
    pub fn new() -> StackResult<Self> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(INITIAL_CAPACITY)
            .map_err(|_| StackError::out_of_memory(INITIAL_CAPACITY * size_of::<T>()))?;

        Ok(Self {
            items,
            capacity: INITIAL_CAPACITY,
        })
    }

    /// Returns the number of live elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the stack holds no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks if the stack has reached the hard capacity ceiling
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity == MAX_CAPACITY && self.items.len() == self.capacity
    }

    /// Returns the current logical capacity
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of slots free before the next resize or rejection
    #[must_use]
    pub fn available(&self) -> usize {
        self.capacity - self.items.len()
    }

    /// Borrows the top element without removing it
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Pushes an element onto the top of the stack
    ///
    /// Grows the buffer by doubling (capped at [`MAX_CAPACITY`]) when the
    /// current capacity is exhausted. Fails with [`StackError::StackFull`]
    /// at the ceiling and [`StackError::OutOfMemory`] if the reallocation is
    /// refused; either way the stack is left unchanged.
    pub fn push(&mut self, item: T) -> StackResult<()> {
        if self.items.len() == self.capacity {
            if self.capacity >= MAX_CAPACITY {
                return Err(StackError::stack_full(MAX_CAPACITY));
            }
            let new_capacity = (self.capacity * 2).min(MAX_CAPACITY);
            self.grow(new_capacity)?;
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the top element
    ///
    /// Fails with [`StackError::StackEmpty`] on an empty stack. After a
    /// successful pop, if occupancy has dropped below a quarter of the
    /// capacity the buffer is halved (floored at [`INITIAL_CAPACITY`]);
    /// that shrink is best-effort and never fails the pop.
    pub fn pop(&mut self) -> StackResult<T> {
        let item = self.items.pop().ok_or_else(StackError::stack_empty)?;

        if self.items.len() < self.capacity / 4 && self.capacity > INITIAL_CAPACITY {
            let new_capacity = (self.capacity / 2).max(INITIAL_CAPACITY);
            self.shrink(new_capacity);
        }

        Ok(item)
    }

    /// Reallocates to `new_capacity` slots, preserving all live elements.
    /// On failure the old buffer and capacity stay in place.
    fn grow(&mut self, new_capacity: usize) -> StackResult<()> {
        debug_assert!(new_capacity > self.capacity && new_capacity <= MAX_CAPACITY);

        let additional = new_capacity - self.items.len();
        self.items
            .try_reserve_exact(additional)
            .map_err(|_| StackError::out_of_memory(additional * size_of::<T>()))?;

        #[cfg(feature = "logging")]
        trace!(from = self.capacity, to = new_capacity, "stack grew");

        self.capacity = new_capacity;
        Ok(())
    }

    /// Releases slots down to `new_capacity`. The allocator may decline to
    /// return memory; the logical capacity steps down either way so the
    /// resize policy stays deterministic.
    fn shrink(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= INITIAL_CAPACITY && new_capacity < self.capacity);

        self.items.shrink_to(new_capacity);

        #[cfg(feature = "logging")]
        trace!(from = self.capacity, to = new_capacity, "stack shrank");

        self.capacity = new_capacity;
    }
}
