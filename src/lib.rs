//! # fieldcheck
//!
//! Fluent validation and sanitization for form fields.
//!
//! Wrap a field in a [`Validator`], chain checks and sanitizers, then read the
//! cleaned value and every error at once. Checks never short-circuit: a value
//! that is too short is still trimmed and escaped, and all failures are
//! reported together.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldcheck::{Semigroup, Validator};
//!
//! # fn main() -> Result<(), fieldcheck::ValidatorError> {
//! let title = Validator::text("  Hello   <World>  ")
//!     .trim()
//!     .spacify()
//!     .min_length(3)?
//!     .max_length(64)?
//!     .htmlify();
//!
//! let tags = Validator::list(["  rust", " ", "x"])
//!     .trim()
//!     .not_empty()
//!     .min_length(2)?;
//!
//! assert_eq!(title.to_text(), "Hello &lt;World&gt;");
//! assert_eq!(tags.to_text(), "rust, x");
//!
//! let report = title.into_report().combine(tags.into_report());
//! assert_eq!(report.to_string(), "each entry min length: 2");
//! # Ok(())
//! # }
//! ```
//!
//! ## Two kinds of failure
//!
//! - Bad *data* (too long, empty, missing file) is recorded in the
//!   validator's [`ErrorReport`] and the chain continues.
//! - Bad *use* of the API (negative length bound, asking a text validator
//!   for a list) fails the call with a [`ValidatorError`].
//!
//! ## Features
//!
//! - `serde`: serde support for [`Value`], [`Kind`], [`ErrorReport`] and
//!   [`Validator::from_json`].
//! - `tracing`: debug events for recorded failures, trace events for
//!   filesystem probes, warnings for API misuse.
//! - `proptest`: strategies for field values in [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod fs;
pub mod report;
pub mod sanitize;
pub mod semigroup;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use error::ValidatorError;
pub use fs::{Filesystem, HostFs};
pub use report::ErrorReport;
pub use semigroup::Semigroup;
pub use validator::{LengthMode, Validator};
pub use value::{Kind, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::ValidatorError;
    pub use crate::fs::{Filesystem, HostFs};
    pub use crate::report::ErrorReport;
    pub use crate::semigroup::Semigroup;
    pub use crate::validator::{LengthMode, Validator};
    pub use crate::value::{Kind, Value};
}
