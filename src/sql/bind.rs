//! Binding built arguments onto sqlx queries

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::query::{Query, QueryAs};
use sqlx::{Database, Encode, Type};
use uuid::Uuid;

use crate::types::SqlValue;

/// Bind [`SqlValue`] arguments, in order, onto a sqlx query
///
/// Implemented for [`Query`] and [`QueryAs`] on any database whose driver
/// encodes the scalar types a `SqlValue` can hold.
///
/// # Example
/// ```
/// use safe_condition::{BindArgs, BuilderConfig, Condition, Dialect, build_where_clause};
///
/// let config = BuilderConfig::for_dialect(Dialect::Postgres);
/// let clause = build_where_clause(&[Condition::eq("name", "alice")], &config).unwrap();
///
/// let sql = format!("SELECT * FROM users {}", clause.text);
/// let query = sqlx::query::<sqlx::Postgres>(&sql).bind_args(&clause.args);
/// # let _ = query;
/// ```
pub trait BindArgs<'q, DB: Database>: Sized {
    /// Bind a single value
    fn bind_value<T>(self, value: T) -> Self
    where
        T: 'q + Send + Encode<'q, DB> + Type<DB>;

    /// Bind every argument in order
    ///
    /// `Null` binds as a NULL text value. A `List` (never produced by the
    /// builders) binds as its JSON text.
    fn bind_args(self, args: &[SqlValue]) -> Self
    where
        bool: Encode<'q, DB> + Type<DB>,
        i64: Encode<'q, DB> + Type<DB>,
        f64: Encode<'q, DB> + Type<DB>,
        String: Encode<'q, DB> + Type<DB>,
        Option<String>: Encode<'q, DB> + Type<DB>,
        Decimal: Encode<'q, DB> + Type<DB>,
        DateTime<Utc>: Encode<'q, DB> + Type<DB>,
        Uuid: Encode<'q, DB> + Type<DB>,
    {
        args.iter().fold(self, |query, arg| match arg {
            SqlValue::Null => query.bind_value(None::<String>),
            SqlValue::Bool(b) => query.bind_value(*b),
            SqlValue::Int(i) => query.bind_value(*i),
            SqlValue::Float(f) => query.bind_value(*f),
            SqlValue::Text(s) => query.bind_value(s.clone()),
            SqlValue::Decimal(d) => query.bind_value(*d),
            SqlValue::Timestamp(ts) => query.bind_value(*ts),
            SqlValue::Uuid(id) => query.bind_value(*id),
            SqlValue::List(_) => query.bind_value(arg.to_json().to_string()),
        })
    }
}

impl<'q, DB: Database> BindArgs<'q, DB> for Query<'q, DB, <DB as Database>::Arguments<'q>> {
    fn bind_value<T>(self, value: T) -> Self
    where
        T: 'q + Send + Encode<'q, DB> + Type<DB>,
    {
        self.bind(value)
    }
}

impl<'q, DB: Database, O> BindArgs<'q, DB>
    for QueryAs<'q, DB, O, <DB as Database>::Arguments<'q>>
{
    fn bind_value<T>(self, value: T) -> Self
    where
        T: 'q + Send + Encode<'q, DB> + Type<DB>,
    {
        self.bind(value)
    }
}
