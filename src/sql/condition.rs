//! Condition building for SQL WHERE clauses
//!
//! Converts a list of [`Condition`]s into a parameterized WHERE clause and
//! appends ORDER BY terms to a query fragment.

use crate::config::BuilderConfig;
use crate::error::{ConditionError, Result};
use crate::filter::{Condition, Sort};
use crate::sql::dialect::{Dialect, Placeholders};
use crate::sql::sanitize::validate_column;
use crate::types::{Operator, SqlValue};

/// A built WHERE clause and the arguments for its placeholders, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    /// `WHERE ...`, or empty when there were no conditions
    pub text: String,
    pub args: Vec<SqlValue>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.text, self.args)
    }
}

/// Build a WHERE clause from conditions
///
/// Conditions are joined with `AND` in input order. The first invalid
/// condition aborts the build and nothing partial is returned.
///
/// # Supported Operators
/// - Comparison: `=`, `!=`, `>`, `>=`, `<`, `<=`, `LIKE`
/// - List: `IN` (non-empty list)
/// - Extended: `BETWEEN` (exactly two values), `IS NULL`, `IS NOT NULL`
///
/// # Example
/// ```
/// use safe_condition::{BuilderConfig, Condition, Dialect, build_where_clause};
///
/// let config = BuilderConfig::for_dialect(Dialect::Postgres);
/// let clause = build_where_clause(
///     &[Condition::eq("u.name", "alice"), Condition::is_in("id", vec![1, 2])],
///     &config,
/// )
/// .unwrap();
///
/// assert_eq!(clause.text, r#"WHERE "u"."name" = $1 AND "id" IN ($2, $3)"#);
/// assert_eq!(clause.args.len(), 3);
/// ```
pub fn build_where_clause(conditions: &[Condition], config: &BuilderConfig) -> Result<WhereClause> {
    if conditions.is_empty() {
        return Ok(WhereClause::default());
    }

    let mut placeholders = config.dialect.placeholders(config.param_offset);
    let mut fragments = Vec::with_capacity(conditions.len());
    let mut args = Vec::new();

    for condition in conditions {
        let fragment = build_condition(condition, config, &mut placeholders, &mut args)
            .inspect_err(|err| {
                tracing::debug!(
                    field = %condition.field,
                    operator = %condition.operator,
                    error = %err,
                    "rejected condition"
                );
            })?;
        fragments.push(fragment);
    }

    let text = format!("WHERE {}", fragments.join(" AND "));
    tracing::trace!(clause = %text, args = args.len(), "built where clause");

    Ok(WhereClause { text, args })
}

/// Build the SQL fragment for one condition, appending its arguments
fn build_condition(
    condition: &Condition,
    config: &BuilderConfig,
    placeholders: &mut Placeholders,
    args: &mut Vec<SqlValue>,
) -> Result<String> {
    validate_column(&condition.field)?;

    let operator: Operator = condition.operator.parse()?;
    if operator.is_extended() && !config.extended_operators {
        return Err(ConditionError::unsupported_operator(operator.as_sql()));
    }

    let column = config.dialect.escape_column(&condition.field);

    match operator {
        Operator::In => {
            let values = list_operand(condition, operator)?;
            if values.is_empty() {
                return Err(ConditionError::invalid_operand(
                    &condition.field,
                    "IN requires a non-empty list",
                ));
            }

            let mut marks = Vec::with_capacity(values.len());
            for value in values {
                marks.push(placeholders.next_placeholder());
                args.push(value.clone());
            }

            Ok(format!("{} IN ({})", column, marks.join(", ")))
        }
        Operator::Between => {
            let values = list_operand(condition, operator)?;
            let [low, high] = values else {
                return Err(ConditionError::invalid_operand(
                    &condition.field,
                    format!("BETWEEN requires exactly 2 values, got {}", values.len()),
                ));
            };

            let low_mark = placeholders.next_placeholder();
            let high_mark = placeholders.next_placeholder();
            args.push(low.clone());
            args.push(high.clone());

            Ok(format!("{} BETWEEN {} AND {}", column, low_mark, high_mark))
        }
        Operator::IsNull | Operator::IsNotNull => Ok(format!("{} {}", column, operator)),
        Operator::Eq
        | Operator::Ne
        | Operator::Gt
        | Operator::Gte
        | Operator::Lt
        | Operator::Lte
        | Operator::Like => {
            if condition.value.as_list().is_some() {
                return Err(ConditionError::invalid_operand(
                    &condition.field,
                    format!("{} requires a single value, got a list", operator),
                ));
            }

            let mark = placeholders.next_placeholder();
            args.push(condition.value.clone());

            Ok(format!("{} {} {}", column, operator, mark))
        }
    }
}

/// Extract the list operand of `IN`/`BETWEEN`; nested lists cannot be bound
fn list_operand(condition: &Condition, operator: Operator) -> Result<&[SqlValue]> {
    let values = condition.value.as_list().ok_or_else(|| {
        ConditionError::invalid_operand(
            &condition.field,
            format!(
                "{} requires a list value, got {}",
                operator,
                condition.value.kind()
            ),
        )
    })?;

    if values.iter().any(|v| v.as_list().is_some()) {
        return Err(ConditionError::invalid_operand(
            &condition.field,
            format!("{} values cannot contain nested lists", operator),
        ));
    }

    Ok(values)
}

/// Append ORDER BY terms to a query fragment
///
/// The first term is prefixed with ` order by `, later ones with `, `. Fields
/// are escaped like condition columns. Empty `sorts` leaves the query as is.
///
/// # Example
/// ```
/// use safe_condition::{Dialect, Sort, build_order_by};
///
/// let sql = build_order_by(
///     "select * from t",
///     &[Sort::asc("name"), Sort::desc("age")],
///     Dialect::MySql,
/// );
/// assert_eq!(sql, "select * from t order by `name` asc, `age` desc");
/// ```
pub fn build_order_by(query: impl Into<String>, sorts: &[Sort], dialect: Dialect) -> String {
    let mut query = query.into();

    for (i, sort) in sorts.iter().enumerate() {
        query.push_str(if i == 0 { " order by " } else { ", " });
        query.push_str(&dialect.escape_column(&sort.field));
        query.push(' ');
        query.push_str(sort.direction.as_str());
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mysql() -> BuilderConfig {
        BuilderConfig::for_dialect(Dialect::MySql)
    }

    fn postgres() -> BuilderConfig {
        BuilderConfig::for_dialect(Dialect::Postgres)
    }

    fn count_placeholders(text: &str, dialect: Dialect) -> usize {
        match dialect {
            Dialect::MySql => text.matches('?').count(),
            Dialect::Postgres => text.matches('$').count(),
        }
    }

    // ==================== Empty Input ====================

    #[test]
    fn test_empty_conditions() {
        let clause = build_where_clause(&[], &mysql()).unwrap();

        assert!(clause.is_empty());
        assert_eq!(clause.text, "");
        assert!(clause.args.is_empty());
    }

    // ==================== Comparison Operations ====================

    #[test]
    fn test_eq_condition() {
        let clause = build_where_clause(&[Condition::eq("name", "test")], &mysql()).unwrap();

        assert_eq!(clause.text, "WHERE `name` = ?");
        assert_eq!(clause.args, vec![SqlValue::Text("test".to_string())]);
    }

    #[test]
    fn test_default_operator_is_eq() {
        let condition = Condition::new("age", "", 25);
        let clause = build_where_clause(&[condition], &postgres()).unwrap();

        assert_eq!(clause.text, "WHERE \"age\" = $1");
        assert_eq!(clause.args, vec![SqlValue::Int(25)]);
    }

    #[test]
    fn test_operator_normalized() {
        let condition = Condition::new("title", "  like ", "%rust%");
        let clause = build_where_clause(&[condition], &mysql()).unwrap();

        assert_eq!(clause.text, "WHERE `title` LIKE ?");
    }

    #[test]
    fn test_all_scalar_operators() {
        for op in ["=", "!=", ">", ">=", "<", "<=", "LIKE"] {
            for config in [mysql(), postgres()] {
                let clause =
                    build_where_clause(&[Condition::new("price", op, 100)], &config).unwrap();

                assert_eq!(count_placeholders(&clause.text, config.dialect), 1);
                assert_eq!(clause.args, vec![SqlValue::Int(100)]);
                assert!(clause.text.contains(&format!(" {} ", op)));
            }
        }
    }

    #[test]
    fn test_null_value_is_bound() {
        let clause = build_where_clause(&[Condition::eq("parent_id", SqlValue::Null)], &mysql())
            .unwrap();

        assert_eq!(clause.text, "WHERE `parent_id` = ?");
        assert_eq!(clause.args, vec![SqlValue::Null]);
    }

    #[test]
    fn test_scalar_operator_with_list_rejected() {
        let result = build_where_clause(&[Condition::new("id", "=", vec![1, 2])], &mysql());

        assert!(matches!(
            result,
            Err(ConditionError::InvalidOperand { ref column, .. }) if column == "id"
        ));
    }

    // ==================== IN ====================

    #[test]
    fn test_in_condition() {
        let clause = build_where_clause(&[Condition::is_in("id", vec![1, 2, 3])], &mysql())
            .unwrap();

        assert_eq!(clause.text, "WHERE `id` IN (?, ?, ?)");
        assert_eq!(
            clause.args,
            vec![SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(3)]
        );
    }

    #[test]
    fn test_in_condition_postgres() {
        let clause = build_where_clause(&[Condition::is_in("id", vec![1, 2, 3])], &postgres())
            .unwrap();

        assert_eq!(clause.text, "WHERE \"id\" IN ($1, $2, $3)");
        assert_eq!(clause.args.len(), 3);
    }

    #[test]
    fn test_in_empty_list() {
        let result = build_where_clause(
            &[Condition::is_in("id", Vec::<i64>::new())],
            &mysql(),
        );

        assert!(matches!(result, Err(ConditionError::InvalidOperand { .. })));
    }

    #[test]
    fn test_in_non_list() {
        let result = build_where_clause(&[Condition::new("id", "in", 5)], &mysql());

        let err = result.unwrap_err();
        assert!(matches!(err, ConditionError::InvalidOperand { .. }));
        assert!(err.to_string().contains("requires a list value, got int"));
    }

    #[test]
    fn test_in_nested_list() {
        let value = SqlValue::List(vec![SqlValue::from(vec![1, 2]), SqlValue::Int(3)]);
        let result = build_where_clause(&[Condition::new("id", "IN", value)], &mysql());

        assert!(matches!(result, Err(ConditionError::InvalidOperand { .. })));
    }

    // ==================== BETWEEN ====================

    #[test]
    fn test_between_condition() {
        let clause = build_where_clause(&[Condition::between("age", 10, 20)], &postgres())
            .unwrap();

        assert_eq!(clause.text, "WHERE \"age\" BETWEEN $1 AND $2");
        assert_eq!(clause.args, vec![SqlValue::Int(10), SqlValue::Int(20)]);
    }

    #[test]
    fn test_between_condition_mysql() {
        let clause = build_where_clause(&[Condition::between("age", 10, 20)], &mysql()).unwrap();

        assert_eq!(clause.text, "WHERE `age` BETWEEN ? AND ?");
        assert_eq!(count_placeholders(&clause.text, Dialect::MySql), 2);
    }

    #[test]
    fn test_between_wrong_arity() {
        for values in [vec![1], vec![1, 2, 3], vec![]] {
            let result =
                build_where_clause(&[Condition::new("age", "BETWEEN", values)], &postgres());
            assert!(matches!(result, Err(ConditionError::InvalidOperand { .. })));
        }
    }

    #[test]
    fn test_between_non_list() {
        let result = build_where_clause(&[Condition::new("age", "between", "10")], &postgres());
        assert!(matches!(result, Err(ConditionError::InvalidOperand { .. })));
    }

    // ==================== Nullability ====================

    #[test]
    fn test_is_null_conditions() {
        let clause = build_where_clause(
            &[
                Condition::is_null("deleted_at"),
                Condition::is_not_null("t.email"),
            ],
            &postgres(),
        )
        .unwrap();

        assert_eq!(
            clause.text,
            "WHERE \"deleted_at\" IS NULL AND \"t\".\"email\" IS NOT NULL"
        );
        assert!(clause.args.is_empty());
    }

    #[test]
    fn test_is_null_ignores_value() {
        let clause =
            build_where_clause(&[Condition::new("x", "is null", 42)], &mysql()).unwrap();

        assert_eq!(clause.text, "WHERE `x` IS NULL");
        assert!(clause.args.is_empty());
    }

    // ==================== Operator Set ====================

    #[test]
    fn test_unsupported_operator() {
        let result = build_where_clause(&[Condition::new("a", "<>", 1)], &mysql());

        assert!(matches!(
            result,
            Err(ConditionError::UnsupportedOperator(ref op)) if op == "<>"
        ));
    }

    #[test]
    fn test_basic_operator_set_rejects_extended() {
        let config = BuilderConfig::builder().basic_operators().build();

        for condition in [
            Condition::between("age", 1, 2),
            Condition::is_null("a"),
            Condition::is_not_null("a"),
        ] {
            let result = build_where_clause(&[condition], &config);
            assert!(matches!(result, Err(ConditionError::UnsupportedOperator(_))));
        }

        assert!(build_where_clause(&[Condition::is_in("id", vec![1])], &config).is_ok());
    }

    // ==================== Column Validation ====================

    #[test]
    fn test_invalid_column() {
        let result = build_where_clause(&[Condition::eq("; DROP TABLE users", 1)], &mysql());

        assert!(matches!(
            result,
            Err(ConditionError::InvalidColumn(ref c)) if c == "; DROP TABLE users"
        ));
    }

    #[test]
    fn test_invalid_column_aborts_whole_build() {
        let result = build_where_clause(
            &[
                Condition::eq("ok", 1),
                Condition::eq("bad name", 2),
                Condition::eq("also_ok", 3),
            ],
            &postgres(),
        );

        assert!(matches!(result, Err(ConditionError::InvalidColumn(ref c)) if c == "bad name"));
    }

    #[test]
    fn test_invalid_column_checked_before_operator() {
        let result = build_where_clause(&[Condition::new("1abc", "nope", 1)], &mysql());
        assert!(matches!(result, Err(ConditionError::InvalidColumn(_))));
    }

    // ==================== Escaping ====================

    #[test]
    fn test_qualified_column_escaping() {
        let clause = build_where_clause(&[Condition::eq("a.b", 1)], &mysql()).unwrap();
        assert_eq!(clause.text, "WHERE `a`.`b` = ?");

        let clause = build_where_clause(&[Condition::eq("a.b", 1)], &postgres()).unwrap();
        assert_eq!(clause.text, "WHERE \"a\".\"b\" = $1");
    }

    // ==================== Placeholder Numbering ====================

    #[test]
    fn test_numbered_placeholders_across_conditions() {
        let clause = build_where_clause(
            &[
                Condition::is_in("id", vec![1, 2, 3]),
                Condition::eq("status", "active"),
                Condition::between("age", 18, 65),
                Condition::is_null("deleted_at"),
                Condition::lt("score", 10),
            ],
            &postgres(),
        )
        .unwrap();

        assert_eq!(
            clause.text,
            "WHERE \"id\" IN ($1, $2, $3) AND \"status\" = $4 AND \"age\" BETWEEN $5 AND $6 \
             AND \"deleted_at\" IS NULL AND \"score\" < $7"
        );
        assert_eq!(clause.args.len(), 7);
        assert_eq!(clause.args[3], SqlValue::Text("active".to_string()));
    }

    #[test]
    fn test_param_offset() {
        let config = BuilderConfig::builder()
            .dialect(Dialect::Postgres)
            .param_offset(5)
            .build();

        let clause = build_where_clause(
            &[Condition::eq("a", 1), Condition::is_in("b", vec![2, 3])],
            &config,
        )
        .unwrap();

        assert_eq!(clause.text, "WHERE \"a\" = $5 AND \"b\" IN ($6, $7)");
    }

    #[test]
    fn test_build_is_idempotent() {
        let conditions = vec![
            Condition::is_in("id", vec![1, 2]),
            Condition::eq("name", "x"),
        ];
        let config = postgres();

        let first = build_where_clause(&conditions, &config).unwrap();
        let second = build_where_clause(&conditions, &config).unwrap();

        assert_eq!(first, second);
        assert!(second.text.contains("$1"));
    }

    #[test]
    fn test_into_parts() {
        let (text, args) = build_where_clause(&[Condition::eq("a", true)], &mysql())
            .unwrap()
            .into_parts();

        assert_eq!(text, "WHERE `a` = ?");
        assert_eq!(args, vec![SqlValue::Bool(true)]);
    }

    // ==================== build_order_by Tests ====================

    #[test]
    fn test_order_by_two_terms() {
        let sql = build_order_by(
            "select * from t",
            &[Sort::asc("name"), Sort::desc("age")],
            Dialect::MySql,
        );

        assert_eq!(sql, "select * from t order by `name` asc, `age` desc");
    }

    #[test]
    fn test_order_by_postgres_qualified() {
        let sql = build_order_by("select * from t", &[Sort::desc("t.created_at")], Dialect::Postgres);

        assert_eq!(sql, "select * from t order by \"t\".\"created_at\" desc");
    }

    #[test]
    fn test_order_by_empty() {
        let sql = build_order_by("select 1", &[], Dialect::MySql);
        assert_eq!(sql, "select 1");
    }

    #[test]
    fn test_order_by_quotes_embedded_quote_chars() {
        let sql = build_order_by("", &[Sort::asc("we`ird")], Dialect::MySql);
        assert_eq!(sql, " order by `we``ird` asc");
    }
}
