//! Two validated, pure operations with a teaching-grade test suite.
//!
//! The crate exposes [`ops::cube`] and [`ops::triple_join`], each guarded by a
//! single validation rule with a fixed error message. The interesting part is
//! the test coverage strategy around them: parameterized known-value tables,
//! error-message assertions, overflow probes, and property-based suites.

pub mod error;
pub mod logging;
pub mod ops;
pub mod validation;

pub use error::{OpsError, Result, JOIN_BLANK_MSG, MULTIPLIER_ZERO_MSG};
pub use ops::{cube, triple_join};
pub use validation::{classify_join_input, is_blank, BlankKind};
