//! Argument preconditions checked before a tool reaches the catalog.
//!
//! Type and enum checks happen while deserializing the parameters; the rules
//! here cover ranges, patterns and blank strings. A failed rule is reported
//! as an invalid-params error, never as an empty result.

use super::error::ToolError;
use crate::domains::catalog::is_decade_year;

/// Lowest rank accepted by rank lookups.
pub const MIN_RANK: i64 = 1;

/// Highest rank accepted by rank lookups.
pub const MAX_RANK: i64 = 200;

/// Preconditions for a tool's parameters.
pub trait Validate {
    /// Check the parameters, describing the first violated rule.
    fn validate(&self) -> Result<(), ToolError>;
}

/// `value` must contain at least one character.
pub fn non_empty(field: &str, value: &str) -> Result<(), ToolError> {
    if value.is_empty() {
        return Err(ToolError::invalid_arguments(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// `value` must contain at least one non-whitespace character.
pub fn non_blank(field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid_arguments(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// `rank` must lie within [`MIN_RANK`]..=[`MAX_RANK`].
pub fn rank_in_range(rank: i64) -> Result<u32, ToolError> {
    if !(MIN_RANK..=MAX_RANK).contains(&rank) {
        return Err(ToolError::invalid_arguments(format!(
            "Rank must be between {MIN_RANK} and {MAX_RANK}"
        )));
    }
    u32::try_from(rank).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// `year` must be a year between 2000 and 2009.
pub fn decade_year(year: &str) -> Result<(), ToolError> {
    if !is_decade_year(year) {
        return Err(ToolError::invalid_arguments(
            "Year must be between 2000 and 2009",
        ));
    }
    Ok(())
}

/// `value` must be at least 1.
pub fn at_least_one(field: &str, value: i64) -> Result<usize, ToolError> {
    if value < 1 {
        return Err(ToolError::invalid_arguments(format!(
            "{field} must be at least 1"
        )));
    }
    usize::try_from(value).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
