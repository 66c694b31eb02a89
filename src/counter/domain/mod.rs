mod model;
mod store;

pub use model::{create, decrement, increment, Counter, CounterTransform};
pub use store::{CounterFuture, CounterStore, LoadCounterStore, UpdateCounterStore};
