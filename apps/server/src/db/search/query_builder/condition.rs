use super::{BindValue, SqlFragment};

/// Comparison operators supported in filter conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
    /// Array overlap (`&&`): the arrays share at least one element.
    Overlap,
    /// Array containment (`@>`): the column holds every element of the value.
    Contains,
    ILike,
}

impl Operator {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Overlap => "&&",
            Self::Contains => "@>",
            Self::ILike => "ILIKE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Junction {
    And,
    Or,
}

impl Junction {
    fn separator(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// Boolean filter over the searched relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Comparison {
        column: &'static str,
        operator: Operator,
        value: BindValue,
    },
    Combinator {
        junction: Junction,
        children: Vec<Condition>,
    },
}

impl Condition {
    pub fn compare(column: &'static str, operator: Operator, value: impl Into<BindValue>) -> Self {
        Self::Comparison {
            column,
            operator,
            value: value.into(),
        }
    }

    pub fn eq(column: &'static str, value: impl Into<BindValue>) -> Self {
        Self::compare(column, Operator::Eq, value)
    }

    pub fn gt(column: &'static str, value: impl Into<BindValue>) -> Self {
        Self::compare(column, Operator::Gt, value)
    }

    pub fn lt(column: &'static str, value: impl Into<BindValue>) -> Self {
        Self::compare(column, Operator::Lt, value)
    }

    pub fn gte(column: &'static str, value: impl Into<BindValue>) -> Self {
        Self::compare(column, Operator::Gte, value)
    }

    pub fn lte(column: &'static str, value: impl Into<BindValue>) -> Self {
        Self::compare(column, Operator::Lte, value)
    }

    pub fn overlap(column: &'static str, value: impl Into<BindValue>) -> Self {
        Self::compare(column, Operator::Overlap, value)
    }

    pub fn contains(column: &'static str, value: impl Into<BindValue>) -> Self {
        Self::compare(column, Operator::Contains, value)
    }

    pub fn ilike(column: &'static str, value: impl Into<BindValue>) -> Self {
        Self::compare(column, Operator::ILike, value)
    }

    pub fn and(children: Vec<Condition>) -> Self {
        Self::Combinator {
            junction: Junction::And,
            children,
        }
    }

    pub fn or(children: Vec<Condition>) -> Self {
        Self::Combinator {
            junction: Junction::Or,
            children,
        }
    }

    /// True when the condition contributes no predicate at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Comparison { .. } => false,
            Self::Combinator { children, .. } => children.iter().all(Condition::is_empty),
        }
    }

    /// Compile to SQL with `$n` placeholders and the bind values in placeholder order.
    ///
    /// Returns `None` when the condition is empty.
    pub fn to_sql(&self) -> Option<(String, Vec<BindValue>)> {
        self.to_fragment().map(SqlFragment::render)
    }

    pub(crate) fn to_fragment(&self) -> Option<SqlFragment> {
        match self {
            Self::Comparison {
                column,
                operator,
                value,
            } => {
                let mut fragment = SqlFragment::default();
                fragment.push_sql(&format!("{} {} ", column, operator.as_sql()));
                fragment.push_param(value.clone());
                Some(fragment)
            }
            Self::Combinator { junction, children } => {
                let compiled: Vec<SqlFragment> =
                    children.iter().filter_map(Condition::to_fragment).collect();
                if compiled.is_empty() {
                    return None;
                }

                let mut fragment = SqlFragment::default();
                fragment.push_sql("(");
                for (i, child) in compiled.into_iter().enumerate() {
                    if i > 0 {
                        fragment.push_sql(junction.separator());
                    }
                    fragment.append(child);
                }
                fragment.push_sql(")");
                Some(fragment)
            }
        }
    }
}
