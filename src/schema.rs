//! Record schema descriptors
//!
//! Column lists for a record type come from an explicit, ordered list of
//! field descriptors built once per type, rather than from runtime
//! introspection.

use serde::{Deserialize, Serialize};

use crate::sql::dialect::Dialect;

/// One field of a record and the column it maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name in the record type
    pub name: String,
    /// Column name in the table
    pub column: String,
    /// Whether the field is left out of column lists
    #[serde(default)]
    pub skip: bool,
}

impl FieldDescriptor {
    /// Field whose column has the same name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            column: name.clone(),
            name,
            skip: false,
        }
    }

    /// Parse a column attribute of the form `column[,option...]`
    ///
    /// Only the part before the first comma is used. An empty column falls
    /// back to the field name; `-` marks the field as skipped.
    ///
    /// # Example
    /// ```
    /// use safe_condition::FieldDescriptor;
    ///
    /// let field = FieldDescriptor::from_tag("UserName", "user_name,omitempty");
    /// assert_eq!(field.column, "user_name");
    ///
    /// assert!(FieldDescriptor::from_tag("Secret", "-").skip);
    /// assert_eq!(FieldDescriptor::from_tag("Age", "").column, "Age");
    /// ```
    pub fn from_tag(name: impl Into<String>, tag: &str) -> Self {
        let name = name.into();
        let column = tag.split(',').next().unwrap_or_default().trim();

        match column {
            "-" => Self {
                column: name.clone(),
                name,
                skip: true,
            },
            "" => Self::new(name),
            column => Self {
                name,
                column: column.to_string(),
                skip: false,
            },
        }
    }

    /// Map the field to a different column
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Leave the field out of column lists
    pub fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }
}

/// Ordered field descriptors of a record type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Unquoted column names of the non-skipped fields, in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| !f.skip)
            .map(|f| f.column.as_str())
            .collect()
    }

    /// Column names escaped for the dialect
    pub fn quoted_column_names(&self, dialect: Dialect) -> Vec<String> {
        self.column_names()
            .into_iter()
            .map(|c| dialect.escape_column(c))
            .collect()
    }

    /// Comma-separated escaped column list, ready for a SELECT
    pub fn select_list(&self, dialect: Dialect) -> String {
        self.quoted_column_names(dialect).join(", ")
    }

    /// Look up the column a field maps to (skipped fields have none)
    pub fn column_for(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == field && !f.skip)
            .map(|f| f.column.as_str())
    }
}

/// A record type with a fixed column layout
///
/// Implementors typically keep the schema in a `static LazyLock`.
pub trait Record {
    fn record_schema() -> &'static RecordSchema;
}
