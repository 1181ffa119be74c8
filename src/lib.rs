//! First-letter bucket sort for name lists.
//!
//! [`lines`] loads and stores one-record-per-line files, [`bucket`] holds the
//! sort itself and [`shell`] ties them together behind an interactive prompt.

/// Use mimalloc as the global allocator.
/// Sorting a name list is mostly many small String allocations.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod bucket;
pub mod common;
pub mod error;
pub mod lines;
pub mod shell;

pub use bucket::{BucketSummary, Buckets, bucket_key, bucket_sort, simple_uppercase};
pub use error::{Error, Result};
pub use lines::{ReadOutcome, parse_records, read_records, write_records};
pub use shell::{Shell, ShellConfig, SortReport};
