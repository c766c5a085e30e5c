//! SQL statement builder for card searches.
//!
//! Builds parameterized PostgreSQL statements from a [`Condition`] tree:
//! - Projection and target relation
//! - Filter conditions (AND/OR combinators over comparisons)
//! - Ordering and pagination
//!
//! Statements are assembled as a sequence of SQL text and parameter slots. Placeholder
//! numbers (`$1`, `$2`, ...) are only assigned in [`SqlFragment::render`], after the whole
//! statement has been flattened, so the n-th placeholder always refers to the n-th bind value.

mod bind;
mod condition;

pub(crate) use bind::bind_all;
pub use condition::{Condition, Junction, Operator};

use thiserror::Error;

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    TextArray(Vec<String>),
    Bool(bool),
    BigInt(i64),
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<String>> for BindValue {
    fn from(value: Vec<String>) -> Self {
        Self::TextArray(value)
    }
}

impl From<bool> for BindValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        Self::BigInt(value)
    }
}

/// Contract violations when assembling a statement.
///
/// These indicate a programming error in the caller, not bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No fields in SQL expression")]
    NoFields,
    #[error("No tables to query in SQL expression")]
    NoTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SqlPart {
    Text(String),
    Param,
}

/// Partially assembled SQL: text interleaved with unnumbered parameter slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlFragment {
    parts: Vec<SqlPart>,
    args: Vec<BindValue>,
}

impl SqlFragment {
    pub(crate) fn push_sql(&mut self, sql: &str) {
        match self.parts.last_mut() {
            Some(SqlPart::Text(text)) => text.push_str(sql),
            _ => self.parts.push(SqlPart::Text(sql.to_string())),
        }
    }

    pub(crate) fn push_param(&mut self, value: BindValue) {
        self.parts.push(SqlPart::Param);
        self.args.push(value);
    }

    pub(crate) fn append(&mut self, other: SqlFragment) {
        for part in other.parts {
            match part {
                SqlPart::Text(text) => self.push_sql(&text),
                SqlPart::Param => self.parts.push(SqlPart::Param),
            }
        }
        self.args.extend(other.args);
    }

    pub fn args(&self) -> &[BindValue] {
        &self.args
    }

    /// Number every parameter slot by its final position and return the SQL text with
    /// the bind values in placeholder order.
    pub fn render(self) -> (String, Vec<BindValue>) {
        let mut sql = String::new();
        let mut ordinal = 0usize;
        for part in &self.parts {
            match part {
                SqlPart::Text(text) => sql.push_str(text),
                SqlPart::Param => {
                    ordinal += 1;
                    sql.push('$');
                    sql.push_str(&ordinal.to_string());
                }
            }
        }
        debug_assert_eq!(ordinal, self.args.len());
        (sql, self.args)
    }
}

/// A rendered statement ready to be bound and executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub sql: String,
    pub args: Vec<BindValue>,
}

/// `SELECT` statement builder.
///
/// Identifiers are `'static` so only compile-time names can reach the SQL text; every
/// runtime value travels as a bind parameter.
#[derive(Debug, Clone, Default)]
pub struct Select {
    fields: Vec<&'static str>,
    table: Option<&'static str>,
    condition: Option<Condition>,
    order_by: Vec<&'static str>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl Select {
    pub fn new(fields: &[&'static str]) -> Self {
        Self {
            fields: fields.to_vec(),
            ..Self::default()
        }
    }

    pub fn from(mut self, table: &'static str) -> Self {
        self.table = Some(table);
        self
    }

    pub fn filter(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Append an ascending sort key.
    pub fn order_by(mut self, column: &'static str) -> Self {
        self.order_by.push(column);
        self
    }

    pub fn limit(mut self, count: i64) -> Self {
        self.limit = Some(count);
        self
    }

    pub fn offset(mut self, count: i64) -> Self {
        self.offset = Some(count);
        self
    }

    pub fn build(&self) -> Result<CompiledQuery, BuildError> {
        if self.fields.is_empty() {
            return Err(BuildError::NoFields);
        }
        let table = self.table.ok_or(BuildError::NoTable)?;

        let mut sql = SqlFragment::default();
        sql.push_sql(&format!("SELECT {} FROM {}", self.fields.join(", "), table));

        if let Some(filter) = self.condition.as_ref().and_then(Condition::to_fragment) {
            sql.push_sql(" WHERE ");
            sql.append(filter);
        }

        if !self.order_by.is_empty() {
            let keys: Vec<String> = self
                .order_by
                .iter()
                .map(|column| format!("{column} ASC"))
                .collect();
            sql.push_sql(" ORDER BY ");
            sql.push_sql(&keys.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_sql(" LIMIT ");
            sql.push_param(BindValue::BigInt(limit));
        }

        if let Some(offset) = self.offset.filter(|offset| *offset > 0) {
            sql.push_sql(" OFFSET ");
            sql.push_param(BindValue::BigInt(offset));
        }

        let (sql, args) = sql.render();
        Ok(CompiledQuery { sql, args })
    }
}
