//! SQL utilities
//!
//! Provides WHERE/ORDER BY generation, identifier sanitization, dialects and
//! argument binding.

pub mod bind;
pub mod condition;
pub mod dialect;
pub mod list;
pub mod sanitize;

pub use bind::BindArgs;
pub use condition::{WhereClause, build_order_by, build_where_clause};
pub use dialect::{Dialect, Placeholders};
pub use list::BuiltQuery;
pub use sanitize::{COLUMN_PATTERN, escape_column, is_safe_column, quote_identifier, validate_column};
