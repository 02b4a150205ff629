//! A fixed-capacity FIFO ring buffer. The tree uses it to sequence nodes during a
//! level-order traversal, but it is generic over what it stores.
//!
//! # Examples
//!
//! ```
//! use bst::{BoundedQueue, Error};
//!
//! let mut queue = BoundedQueue::with_capacity(2);
//! assert!(queue.is_empty());
//!
//! queue.enqueue('a')?;
//! queue.enqueue('b')?;
//!
//! // Full queues refuse new elements instead of overwriting old ones.
//! assert_eq!(queue.enqueue('c'), Err(Error::CapacityExceeded { capacity: 2 }));
//!
//! assert_eq!(queue.front(), Ok(&'a'));
//! assert_eq!(queue.dequeue(), Ok('a'));
//! assert_eq!(queue.dequeue(), Ok('b'));
//! assert!(queue.is_empty());
//! # Ok::<(), Error>(())
//! ```

use std::fmt;

use crate::error::{Error, Result, Structure};

/// Indices of the oldest and newest stored elements. Both are always valid slots of the
/// backing buffer and are only meaningful together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    front: usize,
    back: usize,
}

/// A FIFO queue backed by a buffer whose size is fixed when the queue is created.
///
/// The empty state is tracked apart from the indices, so every slot of the buffer is usable:
/// a queue created with capacity `n` holds up to `n` elements.
pub struct BoundedQueue<T> {
    slots: Vec<Option<T>>,
    /// `None` exactly when the queue is empty.
    span: Option<Span>,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue that can hold `capacity` elements. A queue with a capacity of
    /// zero is permanently full.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, span: None }
    }

    /// The maximum number of elements this queue can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of elements currently stored.
    pub fn len(&self) -> usize {
        self.span.map_or(0, |Span { front, back }| {
            (back + self.capacity() - front) % self.capacity() + 1
        })
    }

    /// Returns `true` if the queue holds nothing.
    pub fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    /// Returns `true` if the next [`enqueue`](Self::enqueue) would be rejected.
    pub fn is_full(&self) -> bool {
        match self.span {
            _ if self.capacity() == 0 => true,
            None => false,
            Some(Span { front, back }) => self.advance(back) == front,
        }
    }

    /// Adds `item` at the back of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the queue is full. The queue is left untouched.
    pub fn enqueue(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        let back = match self.span {
            None => {
                self.span = Some(Span { front: 0, back: 0 });
                0
            }
            Some(Span { front, back }) => {
                let back = self.advance(back);
                self.span = Some(Span { front, back });
                back
            }
        };
        self.slots[back] = Some(item);

        Ok(())
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if there is nothing to remove.
    pub fn dequeue(&mut self) -> Result<T> {
        let Span { front, back } = self.span.ok_or(Error::EmptyStructure(Structure::Queue))?;
        let item = self.slots[front].take();

        self.span = if front == back {
            None
        } else {
            Some(Span {
                front: self.advance(front),
                back,
            })
        };

        item.ok_or(Error::EmptyStructure(Structure::Queue))
    }

    /// Returns the element at the front of the queue without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the queue is empty.
    pub fn front(&self) -> Result<&T> {
        self.span
            .and_then(|span| self.slots[span.front].as_ref())
            .ok_or(Error::EmptyStructure(Structure::Queue))
    }

    /// The slot after `index`, wrapping around the end of the buffer.
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }
}

impl<T> fmt::Debug for BoundedQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity())
            .field("span", &self.span)
            .field("slots", &self.slots)
            .finish()
    }
}
