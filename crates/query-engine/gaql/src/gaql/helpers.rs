//! Helpers for building gaql::ast types in certain shapes and patterns.

use super::ast::*;
use query_engine_metadata::metadata::DateRange;

/// An empty `WHERE` clause.
pub fn empty_where() -> Where {
    Where(vec![])
}

/// Build a select over a resource with the given fields and no conditions.
pub fn simple_select(fields: Vec<FieldName>, resource: ResourceName) -> Select {
    Select {
        select_list: SelectList(fields),
        from: From { resource },
        where_: empty_where(),
    }
}

pub fn field(path: &str) -> FieldName {
    FieldName(path.to_string())
}

pub fn resource(name: &str) -> ResourceName {
    ResourceName(name.to_string())
}

/// `<field> = <value>`
pub fn equals(field: FieldName, value: Literal) -> Condition {
    Condition::BinaryOperation {
        left: field,
        operator: BinaryOperator::Equals,
        right: value,
    }
}

/// `<field> > <value>`
pub fn greater_than(field: FieldName, value: Literal) -> Condition {
    Condition::BinaryOperation {
        left: field,
        operator: BinaryOperator::GreaterThan,
        right: value,
    }
}

/// `<field> DURING <range>`
pub fn during(field: FieldName, range: DateRange) -> Condition {
    Condition::During { field, range }
}
