//! Filter input types
//!
//! Includes Condition, Sort, Pages and ListConditions. These are built by the
//! caller per query (or deserialized from a JSON request) and consumed once.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{SortOrder, SqlValue};

/// One predicate term destined for a WHERE clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Column name, optionally qualified (`table.column`)
    pub field: String,
    /// Operator text; empty means `=`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operator: String,
    /// Operand; a list for `IN` and `BETWEEN`, ignored for null checks
    #[serde(default)]
    pub value: SqlValue,
}

impl Condition {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<SqlValue>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// field = value
    pub fn eq(field: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self::new(field, "=", value)
    }

    /// field != value
    pub fn ne(field: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self::new(field, "!=", value)
    }

    /// field > value
    pub fn gt(field: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self::new(field, ">", value)
    }

    /// field >= value
    pub fn gte(field: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self::new(field, ">=", value)
    }

    /// field < value
    pub fn lt(field: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self::new(field, "<", value)
    }

    /// field <= value
    pub fn lte(field: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self::new(field, "<=", value)
    }

    /// field LIKE pattern
    pub fn like(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        let pattern: String = pattern.into();
        Self::new(field, "LIKE", pattern)
    }

    /// field IN (values...)
    pub fn is_in<T: Into<SqlValue>>(field: impl Into<String>, values: Vec<T>) -> Self {
        Self::new(field, "IN", values)
    }

    /// field BETWEEN low AND high
    pub fn between(
        field: impl Into<String>,
        low: impl Into<SqlValue>,
        high: impl Into<SqlValue>,
    ) -> Self {
        Self::new(field, "BETWEEN", SqlValue::List(vec![low.into(), high.into()]))
    }

    /// field IS NULL
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::new(field, "IS NULL", SqlValue::Null)
    }

    /// field IS NOT NULL
    pub fn is_not_null(field: impl Into<String>) -> Self {
        Self::new(field, "IS NOT NULL", SqlValue::Null)
    }
}

/// One ORDER BY term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    #[serde(default)]
    pub direction: SortOrder,
}

impl Sort {
    pub fn new(field: impl Into<String>, direction: SortOrder) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Desc)
    }
}

fn default_page() -> i64 {
    1
}

/// Pagination window
///
/// `page` is 1-based; a `size` of zero or less means "no pagination".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default)]
    pub size: i64,
}

impl Default for Pages {
    fn default() -> Self {
        Self { page: 1, size: 0 }
    }
}

impl Pages {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    /// Row limit, or `None` when pagination is disabled
    pub fn limit(&self) -> Option<i64> {
        (self.size > 0).then_some(self.size)
    }

    /// Rows to skip; pages below 1 count as the first page
    pub fn offset(&self) -> i64 {
        match self.limit() {
            Some(size) => (self.page.max(1) - 1).saturating_mul(size),
            None => 0,
        }
    }
}

/// Conditions, sorts and pagination of a list request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListConditions {
    #[serde(flatten)]
    pub pages: Pages,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub sorts: Vec<Sort>,
}

impl ListConditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a list request from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a condition
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Add a sort term
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    /// Set pagination
    pub fn paginate(mut self, page: i64, size: i64) -> Self {
        self.pages = Pages::new(page, size);
        self
    }
}

/// Row returned by a count query (`SELECT COUNT(*) AS number ...`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct Total {
    pub number: i64,
}
