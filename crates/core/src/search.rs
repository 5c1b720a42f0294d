//! Listing and search parameters for the public catalog endpoints.

use crate::error::CoreError;

/// Default page size for ghazal and quote listings.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Upper bound on page size.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Clamp a user-provided limit to `[1, max]`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Which text columns a ghazal search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchIn {
    /// Persian text, translation, and the ghazal number.
    #[default]
    All,
    Persian,
    Translation,
}

impl SearchIn {
    pub fn parse(value: Option<&str>) -> Result<Self, CoreError> {
        match value.map(str::trim) {
            None | Some("") | Some("all") => Ok(Self::All),
            Some("persian") => Ok(Self::Persian),
            Some("translation") | Some("interpretation") => Ok(Self::Translation),
            Some(other) => Err(CoreError::Validation(format!(
                "search_in must be one of all, persian, translation; got '{other}'"
            ))),
        }
    }

    pub fn includes_persian(self) -> bool {
        matches!(self, Self::All | Self::Persian)
    }

    pub fn includes_translation(self) -> bool {
        matches!(self, Self::All | Self::Translation)
    }
}

/// Build an `ILIKE` pattern that matches `term` literally anywhere in a column.
///
/// Returns `None` for blank input so callers can skip the filter.
pub fn contains_pattern(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

/// Validate an inclusive ghazal-number range.
pub fn validate_number_range(min: Option<i32>, max: Option<i32>) -> Result<(), CoreError> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(CoreError::Validation(format!(
                "min_number ({min}) must not exceed max_number ({max})"
            )));
        }
    }
    Ok(())
}
