//! The two validated operations: integer cube and string triple-join
//!
//! Both are pure functions with a single validation rule each. They hold no
//! state and are safe to call from any number of threads.

use crate::error::{OpsError, Result};
use crate::validation::classify_join_input;

/// Cubes `i`, rejecting zero.
///
/// Arithmetic wraps per two's-complement fixed-width semantics. Overflow is
/// not detected: `cube(i32::MAX)` returns a wrapped value rather than an
/// error. That gap is inherited from the reference behavior and is exercised
/// (not endorsed) by the overflow probes in the test suite.
pub fn cube(i: i32) -> Result<i32> {
    if i == 0 {
        return Err(OpsError::zero_multiplier());
    }

    let result = i.wrapping_mul(i).wrapping_mul(i);
    tracing::debug!(input = i, result, "cube computed");
    Ok(result)
}

/// Concatenates the input with itself three times, rejecting missing or
/// blank input.
///
/// `None` models an absent (null) input. A valid input is reproduced
/// verbatim, so leading and trailing whitespace of a non-blank string
/// survives into the result.
pub fn triple_join(input: Option<&str>) -> Result<String> {
    let s = classify_join_input(input).map_err(OpsError::blank_join_input)?;

    let result = s.repeat(3);
    tracing::debug!(input = s, result_len = result.len(), "triple-join computed");
    Ok(result)
}
