use crate::error::ContainerError;

use super::{vacant_slots, DEFAULT_CAPACITY};

/// Growable FIFO queue backed by an explicitly owned circular buffer.
///
/// Live elements occupy `len` slots starting at `front`, wrapping modulo
/// capacity; the next write lands at `(front + len) % capacity`. Growth
/// doubles the buffer and re-linearizes elements from `front` into slot 0, so
/// FIFO order survives any number of doublings.
pub struct Queue<T> {
    buf: Box<[Option<T>]>,
    front: usize,
    len: usize,
}

impl<T> Queue<T> {
    /// Creates a queue with the default initial capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a queue with an explicit initial capacity (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Queue capacity must be at least 1");
        Self {
            buf: vacant_slots(capacity),
            front: 0,
            len: 0,
        }
    }

    pub fn enqueue(&mut self, item: T) {
        if self.is_full() {
            self.grow(self.capacity() * 2);
        }
        let back = (self.front + self.len) % self.capacity();
        self.buf[back] = Some(item);
        self.len += 1;
    }

    /// Removes and returns the element at the front of the queue.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        // The front slot is vacant exactly when the queue is empty.
        match self.buf[self.front].take() {
            Some(item) => {
                self.front = (self.front + 1) % self.capacity();
                self.len -= 1;
                Ok(item)
            }
            None => Err(ContainerError::empty("Queue", "dequeue")),
        }
    }

    /// Returns the element at the front of the queue without removing it.
    pub fn front(&self) -> Result<&T, ContainerError> {
        self.buf[self.front]
            .as_ref()
            .ok_or_else(|| ContainerError::empty("Queue", "front"))
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

    /// Reallocates to `new_capacity` slots, copying live elements out in FIFO
    /// order starting at `front`, which resets to slot 0.
    fn grow(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        let mut new_buf = vacant_slots(new_capacity);
        for offset in 0..self.len {
            new_buf[offset] = self.buf[(self.front + offset) % old_capacity].take();
        }
        self.buf = new_buf;
        self.front = 0;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");

        assert_eq!(queue.dequeue(), Ok("a"));
        assert_eq!(queue.dequeue(), Ok("b"));
        assert_eq!(queue.dequeue(), Ok("c"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_growth_preserves_fifo_order() {
        let mut queue = Queue::with_capacity(2);
        queue.enqueue(1);
        queue.enqueue(2);
        assert!(queue.is_full());

        // Third enqueue forces one doubling.
        queue.enqueue(3);
        assert_eq!(queue.capacity(), 4);

        assert_eq!(queue.front(), Ok(&1));
        queue.dequeue().unwrap();
        assert_eq!(queue.front(), Ok(&2));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
    }

    #[test]
    fn test_growth_from_wrapped_state() {
        let mut queue = Queue::with_capacity(3);
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        // Advance front past slot 0, then wrap the write position.
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        queue.enqueue(4);
        queue.enqueue(5);
        assert!(queue.is_full());

        // Live elements straddle the buffer end; growth must re-linearize.
        queue.enqueue(6);
        assert_eq!(queue.capacity(), 6);
        for expected in 3..=6 {
            assert_eq!(queue.dequeue(), Ok(expected));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue: Queue<i32> = Queue::new();
        assert_eq!(
            queue.dequeue(),
            Err(ContainerError::empty("Queue", "dequeue"))
        );
        assert_eq!(
            queue.front().unwrap_err(),
            ContainerError::empty("Queue", "front")
        );
    }

    #[test]
    fn test_front_does_not_mutate() {
        let mut queue = Queue::new();
        queue.enqueue(7);

        assert_eq!(queue.front(), Ok(&7));
        assert_eq!(queue.front(), Ok(&7));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_len_tracks_enqueues_and_dequeues() {
        let mut queue = Queue::with_capacity(4);
        for n in 0..10 {
            queue.enqueue(n);
        }
        assert_eq!(queue.len(), 10);
        assert_eq!(queue.capacity(), 16);

        for _ in 0..4 {
            queue.dequeue().unwrap();
        }
        assert_eq!(queue.len(), 6);
    }
}
