//! Debounced values
//!
//! - [`Debouncer`] - the emission rules as a clock-driven state machine
//! - [`DebouncedValue`] - the same rules driven by a tokio timer, with
//!   observers notified through a `watch` channel

mod debouncer;
mod value;

pub use debouncer::Debouncer;
pub use value::DebouncedValue;

/// Quiet period used when none is configured
pub const DEFAULT_DELAY_MS: u64 = 500;
