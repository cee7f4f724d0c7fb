//! Type definitions of a GAQL AST representation.

use query_engine_metadata::metadata::DateRange;

/// A GAQL `SELECT` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: From,
    pub where_: Where,
}

/// The fields of a `SELECT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectList(pub Vec<FieldName>);

/// A `FROM` clause. GAQL always selects from exactly one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct From {
    pub resource: ResourceName,
}

/// A `WHERE` clause. GAQL only supports conjunctions, so the conditions are joined
/// with `AND` in order. An empty clause is not rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Where(pub Vec<Condition>);

/// A single condition of a `WHERE` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    BinaryOperation {
        left: FieldName,
        operator: BinaryOperator,
        right: Literal,
    },
    During {
        field: FieldName,
        range: DateRange,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    GreaterThan,
}

/// A literal value on the right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Int64(i64),
    String(String),
}

/// The name of a resource, e.g. `campaign`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceName(pub String);

/// A dotted field path, e.g. `campaign_budget.amount_micros`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName(pub String);
