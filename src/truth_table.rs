use std::fmt::{self, Display};

use crate::error::ExprError;
use crate::parser::{self, ParsedExpression};

/// One row of a truth table: the assignment values in variable order plus
/// the value of the expression under that assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub values: Vec<bool>,
    pub result: bool,
}

/// The complete enumeration of assignments for an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    pub variables: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl TruthTable {
    /// Generates the full table for `expression`.
    ///
    /// Fails exactly where [`parser::validate`] fails, with the same
    /// message. For n distinct variables the table holds 2^n rows; row i
    /// assigns the j-th variable (lexical order) the value of bit j of i,
    /// so the first variable toggles fastest. Cost doubles with every
    /// variable.
    pub fn generate(expression: &str) -> Result<Self, ExprError> {
        parser::validate(expression)?;

        let parsed = ParsedExpression::new(expression)?;
        let num_rows = 1usize << parsed.vars.len();

        let mut rows = Vec::with_capacity(num_rows);

        for i in 0..num_rows {
            let values: Vec<bool> = (0..parsed.vars.len()).map(|j| (i >> j) & 1 == 1).collect();
            let result = parsed.eval_values(&values)?;

            rows.push(TableRow { values, result });
        }

        Ok(Self {
            variables: parsed.vars,
            rows,
        })
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for variable in &self.variables {
            write!(f, "{variable} ")?;
        }
        writeln!(f, "| result")?;

        for row in &self.rows {
            for (variable, &value) in self.variables.iter().zip(&row.values) {
                let width = variable.chars().count();
                write!(f, "{:<width$} ", if value { "T" } else { "F" })?;
            }
            writeln!(f, "| {}", if row.result { "T" } else { "F" })?;
        }

        Ok(())
    }
}
