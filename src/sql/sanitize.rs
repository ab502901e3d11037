//! SQL Identifier Sanitization Utilities
//!
//! Provides functions to validate and quote column names before they are
//! interpolated into SQL text.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConditionError, Result};

/// Column grammar: one identifier, optionally qualified by a table alias
pub const COLUMN_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$";

static COLUMN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COLUMN_PATTERN).expect("column pattern is a valid regex"));

/// Check whether a column name is safe to interpolate
///
/// # Example
/// ```
/// use safe_condition::sql::is_safe_column;
///
/// assert!(is_safe_column("u.name"));
/// assert!(!is_safe_column("name; DROP TABLE users"));
/// ```
pub fn is_safe_column(field: &str) -> bool {
    COLUMN_RE.is_match(field)
}

/// Validate a column name, returning `InvalidColumn` when it fails the grammar
pub fn validate_column(field: &str) -> Result<()> {
    if is_safe_column(field) {
        Ok(())
    } else {
        Err(ConditionError::invalid_column(field))
    }
}

/// Quote a single identifier segment with the given quote character
///
/// Embedded quote characters are doubled.
///
/// # Example
/// ```
/// use safe_condition::sql::quote_identifier;
///
/// assert_eq!(quote_identifier("my_table", '"'), "\"my_table\"");
/// assert_eq!(quote_identifier("my_table", '`'), "`my_table`");
/// ```
pub fn quote_identifier(identifier: &str, quote: char) -> String {
    let doubled: String = [quote, quote].iter().collect();
    let escaped = identifier.replace(quote, &doubled);
    format!("{quote}{escaped}{quote}")
}

/// Escape a column reference
///
/// A field with exactly one dot is treated as `qualifier.column` and each part
/// is quoted separately; anything else is quoted as a single identifier.
pub fn escape_column(field: &str, quote: char) -> String {
    let parts: Vec<&str> = field.split('.').collect();
    if let [qualifier, column] = parts.as_slice() {
        return format!(
            "{}.{}",
            quote_identifier(qualifier, quote),
            quote_identifier(column, quote)
        );
    }
    quote_identifier(field, quote)
}
