//! A GAQL AST, its conversion to a query string, and the execution plan that carries it.

pub mod ast;
pub mod convert;
pub mod execution_plan;
pub mod helpers;
pub mod string;
