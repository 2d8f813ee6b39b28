use colored::Colorize;
use std::fmt;

use crate::validation::BlankKind;

/// Fixed message for a zero cube multiplier.
pub const MULTIPLIER_ZERO_MSG: &str = "multiplier must not be zero";

/// Fixed message for a missing or blank join input.
pub const JOIN_BLANK_MSG: &str = "joined string must not be null or blank";

/// The two failure kinds the validated operations can produce.
///
/// Message text lives in the module-level constants above rather than inside
/// the variants, so callers can assert on the exact wording and the display
/// logic stays decoupled from control flow.
#[derive(Debug)]
pub enum OpsError {
    ZeroMultiplier,
    BlankJoinInput { kind: BlankKind },
}

impl OpsError {
    pub fn zero_multiplier() -> Self {
        Self::ZeroMultiplier
    }

    pub fn blank_join_input(kind: BlankKind) -> Self {
        Self::BlankJoinInput { kind }
    }

    /// The fixed message constant for this error kind, without decoration.
    pub fn message(&self) -> &'static str {
        match self {
            Self::ZeroMultiplier => MULTIPLIER_ZERO_MSG,
            Self::BlankJoinInput { .. } => JOIN_BLANK_MSG,
        }
    }
}

impl fmt::Display for OpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMultiplier => {
                write!(f, "{} {}", "✗".red().bold(), MULTIPLIER_ZERO_MSG)
            }
            Self::BlankJoinInput { kind } => {
                write!(f, "{} {} ({kind})", "✗".red().bold(), JOIN_BLANK_MSG)
            }
        }
    }
}

impl std::error::Error for OpsError {}

pub type Result<T> = std::result::Result<T, OpsError>;
