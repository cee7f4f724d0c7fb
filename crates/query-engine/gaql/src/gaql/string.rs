//! Type definitions of a low-level GAQL string representation.

/// A GAQL query string under construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GAQL {
    pub gaql: String,
}

impl GAQL {
    pub fn new() -> GAQL {
        GAQL::default()
    }

    /// Wrap a complete query string without touching it.
    pub fn from_raw(gaql: String) -> GAQL {
        GAQL { gaql }
    }

    pub fn append_syntax(&mut self, gaql: &str) {
        self.gaql.push_str(gaql);
    }

    /// Append a single-quoted string literal, escaping quotes and backslashes.
    pub fn append_string_literal(&mut self, value: &str) {
        self.gaql.push('\'');
        for c in value.chars() {
            if c == '\'' || c == '\\' {
                self.gaql.push('\\');
            }
            self.gaql.push(c);
        }
        self.gaql.push('\'');
    }
}
