//! Outcome Core
//!
//! Outcomes represent expected failures as ordinary values instead of
//! panics or early returns through `?` chains that lose context. An outcome
//! is either a success (optionally carrying a value) or a failure carrying
//! one or more structured errors.
//!
//! ## Key Concepts
//!
//! - **Error**: immutable message + string metadata describing one failure cause
//! - **Outcome**: success or failure, no payload
//! - **ValueOutcome<T>**: success with a `T`, or failure
//! - **Merge**: fold many outcomes into one, collecting every error
//! - **Boundary**: run a unit of work and turn its faults (returned errors or
//!   panics) into failed outcomes
//!
//! ## Escape hatches
//!
//! Failures travel as values through `fold`, `and_then`, `map` and the
//! merges. Only two operations panic, and both mean the caller broke the
//! contract:
//!
//! - `throw_if_failed` on a failure
//! - the strict value accessors (`value`, `into_value`) on a failure
//!
//! `into_result` is the non-panicking bridge back to `Result` and `?`.
//!
//! # Examples
//!
//! ```
//! use outcome_core::{Outcome, ValueOutcome};
//!
//! fn reserve(stock: u32, wanted: u32) -> ValueOutcome<u32> {
//!     if wanted > stock {
//!         return ValueOutcome::fail_with_entry("not enough stock", "available", stock);
//!     }
//!     ValueOutcome::ok(stock - wanted)
//! }
//!
//! let left = reserve(10, 3).map(|left| left * 2);
//! assert_eq!(left.into_value(), 14);
//!
//! let outcome: Outcome = reserve(1, 3).into();
//! assert_eq!(outcome.errors()[0].metadata_value("available"), Some("1"));
//!
//! let computed = ValueOutcome::try_run(|| "12".parse::<i32>());
//! assert_eq!(computed.into_value(), 12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boundary;
pub mod error;
pub mod errors;
pub mod ext;
pub mod fallible;
pub mod merge;
pub mod outcome;
pub mod value;

mod repr;

// Re-exports for convenience
pub use boundary::{BoxError, Boundary, BoundaryConfig, ConfigError, Fault};
pub use error::{Error, Metadata};
pub use errors::{EmptyErrorList, ErrorList};
pub use ext::ResultExt;
pub use fallible::{Fallible, OutcomeFailed};
pub use merge::{merge_results, merge_values};
pub use outcome::Outcome;
pub use value::ValueOutcome;
