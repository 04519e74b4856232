use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::error::ExprError;
use crate::symbols::Operator;

lazy_static! {
    static ref TOKENIZER: Regex = Regex::new(
        r"(?P<identifier>[A-Za-z][A-Za-z0-9_]*)|(?P<symbol><=>|=>|[¬∧∨⊕→↔!&|^])|(?P<open>\()|(?P<close>\))|(?P<whitespace>\s+)|(?P<unknown>.)"
    )
    .unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"[A-Za-z][A-Za-z0-9_]*").unwrap();
}

/// A single lexical element of an expression.
///
/// Operator spellings are canonicalized through the registry during
/// tokenization, so `AND`, `&` and `∧` all end up as the same token.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprToken {
    Var(String),
    Op(Operator),
    OpenParen,
    CloseParen,
}

/// Splits `expression` into tokens, discarding whitespace.
///
/// The multi-character ASCII spellings `<=>` and `=>` are matched before
/// the single glyphs. Any character that fits none of the token classes is
/// an error rather than being skipped. Empty input yields an empty token
/// sequence.
pub fn tokenize(expression: &str) -> Result<Vec<ExprToken>, ExprError> {
    let mut tokens = Vec::new();

    for capture in TOKENIZER.captures_iter(expression) {
        if let Some(identifier) = capture.name("identifier") {
            match Operator::from_spelling(identifier.as_str()) {
                Some(op) => tokens.push(ExprToken::Op(op)),
                None => tokens.push(ExprToken::Var(identifier.as_str().to_owned())),
            }
        } else if let Some(symbol) = capture.name("symbol") {
            match Operator::from_spelling(symbol.as_str()) {
                Some(op) => tokens.push(ExprToken::Op(op)),
                None => {
                    return Err(ExprError::UnexpectedCharacter(symbol.as_str().to_owned()))
                }
            }
        } else if capture.name("open").is_some() {
            tokens.push(ExprToken::OpenParen);
        } else if capture.name("close").is_some() {
            tokens.push(ExprToken::CloseParen);
        } else if let Some(unknown) = capture.name("unknown") {
            return Err(ExprError::UnexpectedCharacter(unknown.as_str().to_owned()));
        }
    }

    Ok(tokens)
}

/// All distinct variable names in `expression`, in lexical sort order.
///
/// The sorted order defines both the column order of a truth table and the
/// bit position of each variable during row enumeration, so it must be
/// stable across calls. Word-operator spellings are excluded.
pub fn extract_variables(expression: &str) -> Vec<String> {
    IDENTIFIER
        .find_iter(expression)
        .map(|m| m.as_str())
        .filter(|word| Operator::from_spelling(word).is_none())
        .unique()
        .sorted()
        .map(str::to_owned)
        .collect()
}

/// Reorders an infix token sequence into postfix using the shunting-yard
/// algorithm.
///
/// Unary operators are pushed onto the operator stack unconditionally; they
/// bind to whatever follows. A binary operator first pops every stacked
/// operator of greater or equal precedence, which makes operators of equal
/// precedence evaluate left-to-right.
pub fn to_postfix(tokens: &[ExprToken]) -> Result<Vec<ExprToken>, ExprError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<ExprToken> = Vec::new();

    for token in tokens {
        match token {
            ExprToken::Var(_) => output.push(token.clone()),
            ExprToken::OpenParen => operators.push(token.clone()),
            ExprToken::CloseParen => loop {
                match operators.pop() {
                    Some(ExprToken::OpenParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(ExprError::MismatchedParentheses),
                }
            },
            ExprToken::Op(op) if op.is_unary() => operators.push(token.clone()),
            ExprToken::Op(op) => {
                while let Some(&ExprToken::Op(top)) = operators.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }

                    output.push(ExprToken::Op(top));
                    operators.pop();
                }

                operators.push(token.clone());
            }
        }
    }

    while let Some(top) = operators.pop() {
        if top == ExprToken::OpenParen {
            return Err(ExprError::MismatchedParentheses);
        }

        output.push(top);
    }

    Ok(output)
}

/// Evaluates a postfix token sequence against a variable assignment.
///
/// Binary operators pop their right-hand operand first, so the ordering of
/// non-commutative operators such as `→` is preserved. The stack must hold
/// exactly one value once the sequence is consumed.
pub fn eval_postfix(
    postfix: &[ExprToken],
    assignment: &FxHashMap<String, bool>,
) -> Result<bool, ExprError> {
    let mut stack: Vec<bool> = Vec::new();

    for token in postfix {
        match token {
            ExprToken::Var(name) => match assignment.get(name) {
                Some(&value) => stack.push(value),
                None => return Err(ExprError::UnknownVariable(name.clone())),
            },
            ExprToken::Op(op) if op.is_unary() => {
                let operand = stack.pop().ok_or(ExprError::MissingOperands(*op))?;

                stack.push(op.eval(operand, false));
            }
            ExprToken::Op(op) => {
                let rhs = stack.pop().ok_or(ExprError::MissingOperands(*op))?;
                let lhs = stack.pop().ok_or(ExprError::MissingOperands(*op))?;

                stack.push(op.eval(lhs, rhs));
            }
            ExprToken::OpenParen | ExprToken::CloseParen => {
                return Err(ExprError::Malformed);
            }
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(result), true) => Ok(result),
        _ => Err(ExprError::Malformed),
    }
}

/// An expression parsed once and ready to be evaluated under many
/// assignments: its sorted free variables plus the postfix form.
#[derive(Debug, Clone)]
pub struct ParsedExpression {
    pub vars: Vec<String>,
    postfix: Vec<ExprToken>,
}

impl ParsedExpression {
    pub fn new(expression: &str) -> Result<Self, ExprError> {
        let tokens = tokenize(expression)?;

        if tokens.is_empty() {
            return Err(ExprError::EmptyExpression);
        }

        let vars = extract_variables(expression);
        let postfix = to_postfix(&tokens)?;

        Ok(Self { vars, postfix })
    }

    /// Evaluates the expression under the given assignment.
    pub fn eval(&self, assignment: &FxHashMap<String, bool>) -> Result<bool, ExprError> {
        eval_postfix(&self.postfix, assignment)
    }

    /// Evaluates with `values` aligned to `self.vars` by position.
    pub fn eval_values(&self, values: &[bool]) -> Result<bool, ExprError> {
        let assignment = self
            .vars
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect();

        eval_postfix(&self.postfix, &assignment)
    }
}

/// Evaluates `expression` with `values` aligned to `variables` by position.
pub fn evaluate(
    expression: &str,
    variables: &[String],
    values: &[bool],
) -> Result<bool, ExprError> {
    let assignment: FxHashMap<String, bool> = variables
        .iter()
        .cloned()
        .zip(values.iter().copied())
        .collect();

    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens)?;

    eval_postfix(&postfix, &assignment)
}

/// Checks that `expression` is well-formed enough to tabulate.
///
/// Runs the full pipeline once with every variable false. An expression
/// with no tokens or no variables is rejected before evaluation.
pub fn validate(expression: &str) -> Result<(), ExprError> {
    let tokens = tokenize(expression)?;

    if tokens.is_empty() {
        return Err(ExprError::EmptyExpression);
    }

    let vars = extract_variables(expression);

    if vars.is_empty() {
        return Err(ExprError::NoVariables);
    }

    let postfix = to_postfix(&tokens)?;
    let assignment = vars.iter().map(|v| (v.clone(), false)).collect();

    eval_postfix(&postfix, &assignment).map(|_| ())
}
