//! Optimistic single-counter demo.
//!
//! A counter is fetched from and persisted to a simulated remote backend.
//! Local updates show immediately; remote writes are debounced so a burst
//! of key presses becomes one persist carrying the latest value.

pub mod args;
pub mod config;
pub mod counter;
pub mod headless;
pub mod logging;
pub mod mvi;
pub mod ui;
