use crate::error::ContainerError;

use super::{vacant_slots, DEFAULT_CAPACITY};

/// Growable LIFO stack backed by an explicitly owned contiguous buffer.
///
/// Slots `0..len` hold live elements, `len..capacity` are vacant. Capacity
/// doubles whenever a push would overflow and never shrinks, so `push` is
/// amortized O(1).
pub struct Stack<T> {
    buf: Box<[Option<T>]>,
    len: usize,
}

impl<T> Stack<T> {
    /// Creates a stack with the default initial capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a stack with an explicit initial capacity (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Stack capacity must be at least 1");
        Self {
            buf: vacant_slots(capacity),
            len: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.is_full() {
            self.grow(self.capacity() * 2);
        }
        self.buf[self.len] = Some(item);
        self.len += 1;
    }

    /// Removes and returns the most recently pushed element.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        let item = self.len.checked_sub(1).and_then(|top| self.buf[top].take());
        match item {
            Some(item) => {
                self.len -= 1;
                Ok(item)
            }
            None => Err(ContainerError::empty("Stack", "pop")),
        }
    }

    /// Returns the most recently pushed element without removing it.
    pub fn top(&self) -> Result<&T, ContainerError> {
        self.len
            .checked_sub(1)
            .and_then(|top| self.buf[top].as_ref())
            .ok_or_else(|| ContainerError::empty("Stack", "top"))
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Reallocates to `new_capacity` slots and migrates elements
    /// index-for-index.
    fn grow(&mut self, new_capacity: usize) {
        let mut new_buf = vacant_slots(new_capacity);
        for (new_slot, old_slot) in new_buf.iter_mut().zip(self.buf.iter_mut()) {
            *new_slot = old_slot.take();
        }
        self.buf = new_buf;
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_tracks_pushes_and_top_is_last_push() {
        let mut stack = Stack::new();
        for n in 1..=5 {
            stack.push(n);
            assert_eq!(stack.len(), n as usize);
            assert_eq!(stack.top(), Ok(&n));
        }
    }

    #[test]
    fn test_pop_restores_previous_top() {
        let mut stack = Stack::new();
        stack.push("first");
        stack.push("second");

        assert_eq!(stack.pop(), Ok("second"));
        assert_eq!(stack.top(), Ok(&"first"));
    }

    #[test]
    fn test_growth_is_transparent() {
        let mut stack = Stack::with_capacity(2);
        stack.push(1);
        stack.push(2);
        assert!(stack.is_full());

        // Third push forces one doubling.
        stack.push(3);
        assert_eq!(stack.capacity(), 4);
        assert_eq!(stack.top(), Ok(&3));

        stack.pop().unwrap();
        assert_eq!(stack.top(), Ok(&2));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_capacity_doubles_and_never_shrinks() {
        let mut stack = Stack::with_capacity(1);
        for n in 0..9 {
            stack.push(n);
        }
        assert_eq!(stack.capacity(), 16);

        while stack.pop().is_ok() {}
        assert_eq!(stack.capacity(), 16);
    }

    #[test]
    fn test_empty_stack_errors() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), Err(ContainerError::empty("Stack", "pop")));
        assert_eq!(
            stack.top().unwrap_err(),
            ContainerError::empty("Stack", "top")
        );
    }

    #[test]
    fn test_top_does_not_mutate() {
        let mut stack = Stack::new();
        stack.push(42);

        assert_eq!(stack.top(), Ok(&42));
        assert_eq!(stack.top(), Ok(&42));
        assert_eq!(stack.len(), 1);
    }
}
