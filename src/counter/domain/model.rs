//! Counter value object and its pure transforms.

/// Immutable counter value. Every transform returns a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn value(&self) -> i64 {
        self.value
    }
}

/// A transform applied by the update pipeline.
pub type CounterTransform = fn(&Counter) -> Counter;

pub fn create(value: i64) -> Counter {
    Counter { value }
}

/// Increment is unbounded; saturates instead of overflowing.
pub fn increment(counter: &Counter) -> Counter {
    create(counter.value.saturating_add(1))
}

/// Decrement floors at zero.
pub fn decrement(counter: &Counter) -> Counter {
    create(counter.value.saturating_sub(1).max(0))
}
