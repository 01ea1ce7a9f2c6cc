//! Core state primitives
//!
//! Both modules are independent of each other and of the CLI.
//!
//! - `pagination/` - page boundaries derived from item count, page size and requested page
//! - `debounce/` - values that only propagate after a quiet period

pub mod debounce;
pub mod pagination;

pub use debounce::{DebouncedValue, Debouncer};
pub use pagination::{PageSnapshot, Pagination, PaginationOptions, SubscriptionId};
