use super::BindValue;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::Postgres;

/// Attach bind values to a query in placeholder order.
pub(crate) fn bind_all(
    query: Query<'_, Postgres, PgArguments>,
    values: Vec<BindValue>,
) -> Query<'_, Postgres, PgArguments> {
    values.into_iter().fold(query, |query, value| match value {
        BindValue::Text(v) => query.bind(v),
        BindValue::TextArray(vs) => query.bind(vs),
        BindValue::Bool(v) => query.bind(v),
        BindValue::BigInt(v) => query.bind(v),
    })
}
