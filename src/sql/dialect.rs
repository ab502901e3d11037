//! SQL dialects: identifier quoting and placeholder syntax

use serde::{Deserialize, Serialize};

use crate::sql::sanitize::escape_column;

/// Identifier quoting style paired with placeholder syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Backtick-quoted identifiers with positional `?` placeholders
    #[default]
    MySql,
    /// Double-quoted identifiers with numbered `$1, $2, ...` placeholders
    Postgres,
}

impl Dialect {
    pub fn quote_char(&self) -> char {
        match self {
            Dialect::MySql => '`',
            Dialect::Postgres => '"',
        }
    }

    /// Escape a (possibly table-qualified) column for this dialect
    pub fn escape_column(&self, field: &str) -> String {
        escape_column(field, self.quote_char())
    }

    /// Start a placeholder sequence at `offset` (ignored for positional placeholders)
    pub fn placeholders(&self, offset: usize) -> Placeholders {
        Placeholders {
            dialect: *self,
            next: offset,
        }
    }
}

/// Placeholder generator for a single build
///
/// Numbered dialects advance by one per call, so every expanded list element
/// gets its own index.
#[derive(Debug)]
pub struct Placeholders {
    dialect: Dialect,
    next: usize,
}

impl Placeholders {
    pub fn next_placeholder(&mut self) -> String {
        match self.dialect {
            Dialect::MySql => "?".to_string(),
            Dialect::Postgres => {
                let placeholder = format!("${}", self.next);
                self.next += 1;
                placeholder
            }
        }
    }
}
