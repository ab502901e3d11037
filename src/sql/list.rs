//! List query composition
//!
//! Combines the WHERE builder, ORDER BY helper and pagination into complete
//! select and count statements.

use crate::config::BuilderConfig;
use crate::error::Result;
use crate::filter::ListConditions;
use crate::sql::condition::{build_order_by, build_where_clause};
use crate::sql::sanitize::validate_column;
use crate::types::SqlValue;

/// SQL text with the arguments for its placeholders, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub args: Vec<SqlValue>,
}

impl ListConditions {
    /// Build `<base> [WHERE ...] [order by ...] [LIMIT .. OFFSET ..]`
    ///
    /// Limit and offset are bound as the last two arguments. Sort fields are
    /// validated like condition columns.
    pub fn build_select(&self, base: &str, config: &BuilderConfig) -> Result<BuiltQuery> {
        for sort in &self.sorts {
            validate_column(&sort.field)?;
        }

        let clause = build_where_clause(&self.conditions, config)?;

        let mut sql = base.trim_end().to_string();
        if !clause.is_empty() {
            sql.push(' ');
            sql.push_str(&clause.text);
        }
        let mut sql = build_order_by(sql, &self.sorts, config.dialect);
        let mut args = clause.args;

        if let Some(limit) = self.pages.limit() {
            let mut placeholders = config
                .dialect
                .placeholders(config.param_offset + args.len());
            let limit_mark = placeholders.next_placeholder();
            let offset_mark = placeholders.next_placeholder();

            sql.push_str(&format!(" LIMIT {} OFFSET {}", limit_mark, offset_mark));
            args.push(SqlValue::Int(limit));
            args.push(SqlValue::Int(self.pages.offset()));
        }

        tracing::trace!(sql = %sql, args = args.len(), "built list query");
        Ok(BuiltQuery { sql, args })
    }

    /// Build `SELECT COUNT(*) AS number FROM <table> [WHERE ...]`
    ///
    /// The result row reads into [`Total`](crate::filter::Total).
    pub fn build_count(&self, table: &str, config: &BuilderConfig) -> Result<BuiltQuery> {
        validate_column(table)?;

        let clause = build_where_clause(&self.conditions, config)?;

        let mut sql = format!(
            "SELECT COUNT(*) AS number FROM {}",
            config.dialect.escape_column(table)
        );
        if !clause.is_empty() {
            sql.push(' ');
            sql.push_str(&clause.text);
        }

        Ok(BuiltQuery {
            sql,
            args: clause.args,
        })
    }
}
