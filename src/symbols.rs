use std::fmt::{self, Display};

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Canonical identity of a logical connective.
///
/// Every accepted spelling (symbolic, all-caps word, or ASCII) resolves to
/// one of these via [`from_spelling`]. Precedence follows the usual
/// convention: negation binds tightest, the biconditional loosest.
///
/// [`from_spelling`]: Operator::from_spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Not,
    And,
    Or,
    Xor,
    Implies,
    Iff,
}

lazy_static! {
    static ref SPELLINGS: FxHashMap<&'static str, Operator> = {
        let mut spellings = FxHashMap::default();

        for (spelling, op) in [
            ("¬", Operator::Not),
            ("NOT", Operator::Not),
            ("!", Operator::Not),
            ("∧", Operator::And),
            ("AND", Operator::And),
            ("&", Operator::And),
            ("∨", Operator::Or),
            ("OR", Operator::Or),
            ("|", Operator::Or),
            ("⊕", Operator::Xor),
            ("XOR", Operator::Xor),
            ("^", Operator::Xor),
            ("→", Operator::Implies),
            ("IMP", Operator::Implies),
            ("=>", Operator::Implies),
            ("↔", Operator::Iff),
            ("IFF", Operator::Iff),
            ("<=>", Operator::Iff),
        ] {
            spellings.insert(spelling, op);
        }

        spellings
    };
}

impl Operator {
    /// Resolves an accepted spelling to its canonical operator.
    ///
    /// Returns `None` when the word is not an operator, so the caller can
    /// treat it as a variable instead. Matching is case-sensitive: `AND` is
    /// an operator, `and` is an ordinary variable name.
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        SPELLINGS.get(spelling).copied()
    }

    /// Precedence rank of this operator; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Not => 5,
            Self::And => 4,
            Self::Or => 3,
            Self::Xor => 2,
            Self::Implies => 1,
            Self::Iff => 0,
        }
    }

    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not)
    }

    /// The canonical glyph for this operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "¬",
            Self::And => "∧",
            Self::Or => "∨",
            Self::Xor => "⊕",
            Self::Implies => "→",
            Self::Iff => "↔",
        }
    }

    /// Applies the operator to its operands.
    ///
    /// The unary `Not` reads `lhs` only; `rhs` is ignored.
    pub fn eval(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Self::Not => !lhs,
            Self::And => lhs && rhs,
            Self::Or => lhs || rhs,
            Self::Xor => lhs != rhs,
            Self::Implies => !lhs || rhs,
            Self::Iff => lhs == rhs,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}
