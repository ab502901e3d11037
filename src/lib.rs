//! # safe-condition
//!
//! Dialect-aware builders for parameterized SQL `WHERE` and `ORDER BY`
//! fragments.
//!
//! Callers describe filters as `(field, operator, value)` triples; the builder
//! validates every column name, normalizes the operator and emits a clause with
//! placeholders plus the matching argument list. Values never end up in the
//! SQL text.
//!
//! ## Features
//!
//! - **Column validation**: `identifier` or `table.identifier`, nothing else
//! - **Two dialects**: backtick quoting with `?` placeholders (MySQL) and
//!   double-quote quoting with `$n` placeholders (PostgreSQL)
//! - **Operators**: `=`, `!=`, `>`, `>=`, `<`, `<=`, `LIKE`, `IN`, `BETWEEN`,
//!   `IS NULL`, `IS NOT NULL`
//! - **List queries**: conditions, sorts and pagination composed into select
//!   and count statements
//! - **sqlx binding**: arguments bind onto `sqlx::query` in order
//!
//! ## Quick Start
//!
//! ```rust
//! use safe_condition::{BuilderConfig, Condition, Dialect, Sort, build_order_by, build_where_clause};
//!
//! let config = BuilderConfig::for_dialect(Dialect::Postgres);
//! let clause = build_where_clause(
//!     &[
//!         Condition::eq("status", "active"),
//!         Condition::is_in("id", vec![1, 2, 3]),
//!         Condition::between("age", 18, 65),
//!     ],
//!     &config,
//! )?;
//!
//! assert_eq!(
//!     clause.text,
//!     r#"WHERE "status" = $1 AND "id" IN ($2, $3, $4) AND "age" BETWEEN $5 AND $6"#
//! );
//! assert_eq!(clause.args.len(), 6);
//!
//! let sql = build_order_by(
//!     format!("SELECT * FROM users {}", clause.text),
//!     &[Sort::desc("created_at")],
//!     config.dialect,
//! );
//! assert!(sql.ends_with(r#"order by "created_at" desc"#));
//! # Ok::<(), safe_condition::ConditionError>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use safe_condition::{BuilderConfig, Dialect};
//!
//! let config = BuilderConfig::builder()
//!     .dialect(Dialect::Postgres) // Default: MySql
//!     .param_offset(3)            // First placeholder is $3
//!     .basic_operators()          // Reject BETWEEN / IS NULL / IS NOT NULL
//!     .build();
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod schema;
pub mod sql;
pub mod types;

// Re-export main types for convenience
pub use config::{BuilderConfig, BuilderConfigBuilder};
pub use error::{ConditionError, Result};
pub use filter::{Condition, ListConditions, Pages, Sort, Total};
pub use schema::{FieldDescriptor, Record, RecordSchema};
pub use types::{Operator, SortOrder, SqlValue};

pub use sql::bind::BindArgs;
pub use sql::condition::{WhereClause, build_order_by, build_where_clause};
pub use sql::dialect::Dialect;
pub use sql::list::BuiltQuery;
pub use sql::sanitize::{escape_column, is_safe_column, quote_identifier};
