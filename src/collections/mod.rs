//! Hand-rolled growable containers over explicitly owned buffers.
//!
//! Both containers manage capacity themselves instead of leaning on `Vec`'s
//! growth policy: a fixed boxed slice of `Option<T>` slots plus length fields,
//! doubled by an explicit reallocate-and-migrate step whenever an insert would
//! overflow. `None` marks a vacant slot.

mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;

pub(crate) const DEFAULT_CAPACITY: usize = 10;

/// Allocates a buffer of `capacity` vacant slots.
pub(crate) fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}
