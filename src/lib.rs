#![warn(clippy::disallowed_types)]

pub use error::ExprError;
pub use symbols::*;
pub use truth_table::{TableRow, TruthTable};

pub mod parser;

mod error;

mod truth_table;

mod symbols;
