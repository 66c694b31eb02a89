mod service;
mod store;

pub use service::{CounterGateway, CounterService, RemoteCounter};
pub use store::{
    CounterIntent, CounterReducer, CounterState, CounterStoreImpl, StorePolicy,
};
