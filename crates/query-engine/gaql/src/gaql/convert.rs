//! Convert a GAQL AST to a low-level GAQL string.

use super::ast::*;
use super::string::*;

// Convert to GAQL strings

impl Select {
    pub fn to_gaql(&self, gaql: &mut GAQL) {
        gaql.append_syntax("SELECT ");

        self.select_list.to_gaql(gaql);

        gaql.append_syntax(" ");

        self.from.to_gaql(gaql);

        self.where_.to_gaql(gaql);
    }
}

impl SelectList {
    pub fn to_gaql(&self, gaql: &mut GAQL) {
        let SelectList(fields) = self;
        for (index, field) in fields.iter().enumerate() {
            field.to_gaql(gaql);
            if index < (fields.len() - 1) {
                gaql.append_syntax(", ");
            }
        }
    }
}

impl From {
    pub fn to_gaql(&self, gaql: &mut GAQL) {
        gaql.append_syntax("FROM ");
        self.resource.to_gaql(gaql);
    }
}

impl Where {
    pub fn to_gaql(&self, gaql: &mut GAQL) {
        let Where(conditions) = self;
        for (index, condition) in conditions.iter().enumerate() {
            if index == 0 {
                gaql.append_syntax(" WHERE ");
            } else {
                gaql.append_syntax(" AND ");
            }
            condition.to_gaql(gaql);
        }
    }
}

impl Condition {
    pub fn to_gaql(&self, gaql: &mut GAQL) {
        match self {
            Condition::BinaryOperation {
                left,
                operator,
                right,
            } => {
                left.to_gaql(gaql);
                operator.to_gaql(gaql);
                right.to_gaql(gaql);
            }
            Condition::During { field, range } => {
                field.to_gaql(gaql);
                gaql.append_syntax(" DURING ");
                gaql.append_syntax(range.as_gaql());
            }
        }
    }
}

impl BinaryOperator {
    pub fn to_gaql(self, gaql: &mut GAQL) {
        match self {
            BinaryOperator::Equals => gaql.append_syntax(" = "),
            BinaryOperator::GreaterThan => gaql.append_syntax(" > "),
        }
    }
}

impl Literal {
    pub fn to_gaql(&self, gaql: &mut GAQL) {
        match self {
            Literal::Int64(value) => gaql.append_syntax(&value.to_string()),
            Literal::String(value) => gaql.append_string_literal(value),
        }
    }
}

impl ResourceName {
    pub fn to_gaql(&self, gaql: &mut GAQL) {
        gaql.append_syntax(&self.0);
    }
}

impl FieldName {
    pub fn to_gaql(&self, gaql: &mut GAQL) {
        gaql.append_syntax(&self.0);
    }
}
