//! pagekit - Pagination state and debounced values
//!
//! This library provides two independent state primitives, plus the
//! catalog, configuration and output helpers used by the `pagekit` CLI.
//!
//! - [`core::Pagination`] - page boundaries derived from item count, page size and requested page
//! - [`core::DebouncedValue`] - a value that only follows its source after a quiet period

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod catalog;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
