//! Configuration for condition building
//!
//! Provides a builder pattern for choosing the SQL dialect and operator set.

use crate::sql::dialect::Dialect;

/// Configuration shared by the WHERE, ORDER BY and list query builders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Identifier quoting and placeholder syntax
    pub dialect: Dialect,
    /// First placeholder number for numbered dialects (default: 1)
    pub param_offset: usize,
    /// Whether `BETWEEN`, `IS NULL` and `IS NOT NULL` are accepted (default: true)
    pub extended_operators: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfigBuilder::new().build()
    }
}

impl BuilderConfig {
    /// Create a new configuration builder
    pub fn builder() -> BuilderConfigBuilder {
        BuilderConfigBuilder::new()
    }

    /// Default configuration for the given dialect
    pub fn for_dialect(dialect: Dialect) -> Self {
        BuilderConfigBuilder::new().dialect(dialect).build()
    }
}

/// Builder for BuilderConfig
#[derive(Debug)]
pub struct BuilderConfigBuilder {
    dialect: Dialect,
    param_offset: usize,
    extended_operators: bool,
}

impl Default for BuilderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderConfigBuilder {
    pub fn new() -> Self {
        Self {
            dialect: Dialect::default(),
            param_offset: 1,
            extended_operators: true,
        }
    }

    /// Set the dialect (default: MySql)
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the first placeholder number; values below 1 are clamped to 1
    pub fn param_offset(mut self, offset: usize) -> Self {
        self.param_offset = offset.max(1);
        self
    }

    /// Enable or disable the extended operator set (default: true)
    pub fn extended_operators(mut self, enabled: bool) -> Self {
        self.extended_operators = enabled;
        self
    }

    /// Restrict the builder to comparison, `LIKE` and `IN` operators
    pub fn basic_operators(mut self) -> Self {
        self.extended_operators = false;
        self
    }

    pub fn build(self) -> BuilderConfig {
        BuilderConfig {
            dialect: self.dialect,
            param_offset: self.param_offset,
            extended_operators: self.extended_operators,
        }
    }
}
