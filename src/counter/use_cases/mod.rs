//! Application use cases for the counter.
//!
//! ```text
//! increment / decrement ──→ update ──→ store.set_counter (now)
//!                                 └──→ Debouncer ──→ store.update_counter (later)
//! get ──→ store.load_initial_counter
//! ```

mod debounce;
mod decrement;
mod get;
mod increment;
mod update;

pub use debounce::{Debouncer, PersistTicket};
pub use decrement::decrement_counter_use_case;
pub use get::get_counter_use_case;
pub use increment::increment_counter_use_case;
pub use update::update_counter_use_case;
