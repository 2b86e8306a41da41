//! Conditional enablement of shortcuts
//!
//! Every shortcut entry carries a `when` expression over named runtime
//! conditions (`"canEdit && !readOnly"`). The expression is parsed into a
//! small boolean AST and evaluated against the caller's [`Conditions`];
//! there is no dynamic code execution. Evaluation failures never reach the
//! dispatch path: they are logged and the shortcut reads as disabled.

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

/// Condition names that resolve to `false` when the caller supplies no value.
const DEFAULT_CONDITIONS: [&str; 4] = ["canEdit", "canCreate", "readOnly", "questionnairesEnabled"];

/// A primitive condition value
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    Bool(bool),
    Str(String),
    Int(i64),
}

impl From<bool> for ConditionValue {
    fn from(v: bool) -> Self {
        ConditionValue::Bool(v)
    }
}

impl From<&str> for ConditionValue {
    fn from(v: &str) -> Self {
        ConditionValue::Str(v.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(v: String) -> Self {
        ConditionValue::Str(v)
    }
}

impl From<i64> for ConditionValue {
    fn from(v: i64) -> Self {
        ConditionValue::Int(v)
    }
}

/// Named runtime conditions supplied by the caller.
///
/// `canEdit`, `canCreate`, `readOnly` and `questionnairesEnabled` always
/// resolve (defaulting to `false`); any other name must be supplied
/// explicitly or expressions referencing it evaluate as disabled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditions(HashMap<String, ConditionValue>);

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a condition value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ConditionValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Set a condition value (builder pattern)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Resolve a name, falling back to the built-in defaults
    fn resolve(&self, name: &str) -> Option<ConditionValue> {
        if let Some(value) = self.0.get(name) {
            return Some(value.clone());
        }
        if DEFAULT_CONDITIONS.contains(&name) {
            return Some(ConditionValue::Bool(false));
        }
        None
    }
}

/// Errors from parsing or evaluating a `when` expression
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    UnexpectedChar(char),
    UnexpectedToken(String),
    UnexpectedEnd,
    UnknownName(String),
    NotABool(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnexpectedChar(c) => write!(f, "unexpected character: '{}'", c),
            EvalError::UnexpectedToken(t) => write!(f, "unexpected token: '{}'", t),
            EvalError::UnexpectedEnd => write!(f, "unexpected end of expression"),
            EvalError::UnknownName(n) => write!(f, "unknown condition name: '{}'", n),
            EvalError::NotABool(v) => write!(f, "expected a boolean, got: {}", v),
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluate a `when` expression against the supplied conditions.
///
/// `"always"` is `true` without consulting conditions. Any lex, parse or
/// evaluation failure logs a warning and yields `false`, so a malformed
/// expression degrades to "shortcut disabled" rather than breaking dispatch.
pub fn evaluate_condition(when: &str, conditions: &Conditions) -> bool {
    match try_evaluate_condition(when, conditions) {
        Ok(enabled) => enabled,
        Err(error) => {
            warn!(when, %error, "failed to evaluate shortcut condition");
            false
        }
    }
}

/// Evaluate a `when` expression, surfacing failures to the caller
pub fn try_evaluate_condition(when: &str, conditions: &Conditions) -> Result<bool, EvalError> {
    if when == "always" {
        return Ok(true);
    }

    let tokens = tokenize(when)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression()?;
    parser.expect_end()?;
    as_bool(eval(&expr, conditions)?)
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Bool(bool),
    Int(i64),
    Str(String),
    AndAnd,
    OrOr,
    Not,
    EqEq,
    NotEq,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s) => write!(f, "{}", s),
            Token::Bool(b) => write!(f, "{}", b),
            Token::Int(n) => write!(f, "{}", n),
            Token::Str(s) => write!(f, "'{}'", s),
            Token::AndAnd => write!(f, "&&"),
            Token::OrOr => write!(f, "||"),
            Token::Not => write!(f, "!"),
            Token::EqEq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '&' => {
                chars.next();
                if chars.next_if_eq(&'&').is_none() {
                    return Err(EvalError::UnexpectedChar('&'));
                }
                tokens.push(Token::AndAnd);
            }
            '|' => {
                chars.next();
                if chars.next_if_eq(&'|').is_none() {
                    return Err(EvalError::UnexpectedChar('|'));
                }
                tokens.push(Token::OrOr);
            }
            '!' => {
                chars.next();
                if chars.next_if_eq(&'=').is_some() {
                    tokens.push(Token::NotEq);
                } else {
                    tokens.push(Token::Not);
                }
            }
            '=' => {
                chars.next();
                if chars.next_if_eq(&'=').is_none() {
                    return Err(EvalError::UnexpectedChar('='));
                }
                tokens.push(Token::EqEq);
            }
            '\'' | '"' => {
                let quote = c;
                chars.next();
                let mut literal = String::new();
                loop {
                    match chars.next() {
                        Some(ch) if ch == quote => break,
                        Some(ch) => literal.push(ch),
                        None => return Err(EvalError::UnexpectedEnd),
                    }
                }
                tokens.push(Token::Str(literal));
            }
            '0'..='9' => {
                let mut number = String::new();
                while let Some(d) = chars.next_if(|ch| ch.is_ascii_digit()) {
                    number.push(d);
                }
                // Overflow reads as a malformed expression.
                let value = number
                    .parse()
                    .map_err(|_| EvalError::UnexpectedToken(number.clone()))?;
                tokens.push(Token::Int(value));
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(ch) = chars.next_if(|ch| ch.is_alphanumeric() || *ch == '_') {
                    ident.push(ch);
                }
                match ident.as_str() {
                    "true" => tokens.push(Token::Bool(true)),
                    "false" => tokens.push(Token::Bool(false)),
                    _ => tokens.push(Token::Ident(ident)),
                }
            }
            other => return Err(EvalError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

/// A parsed `when` expression.
///
/// Parsing is separate from evaluation so that `&&` and `||` can
/// short-circuit: the right operand of a decided operator is never
/// evaluated, and an unknown name there cannot disable the entry.
#[derive(Debug)]
enum Expr {
    Lit(ConditionValue),
    Name(String),
    Not(Box<Expr>),
    Eq(Box<Expr>, Box<Expr>),
    Ne(Box<Expr>, Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

/// Recursive-descent parser: `||` < `&&` < `==`/`!=` < `!` < primary
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect_end(&self) -> Result<(), EvalError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
        }
    }

    fn expression(&mut self) -> Result<Expr, EvalError> {
        self.or_expr()
    }

    fn or_expr(&mut self) -> Result<Expr, EvalError> {
        let mut expr = self.and_expr()?;
        while self.peek() == Some(&Token::OrOr) {
            self.next();
            let right = self.and_expr()?;
            expr = Expr::Or(Box::new(expr), Box::new(right));
        }
        Ok(expr)
    }

    fn and_expr(&mut self) -> Result<Expr, EvalError> {
        let mut expr = self.equality_expr()?;
        while self.peek() == Some(&Token::AndAnd) {
            self.next();
            let right = self.equality_expr()?;
            expr = Expr::And(Box::new(expr), Box::new(right));
        }
        Ok(expr)
    }

    fn equality_expr(&mut self) -> Result<Expr, EvalError> {
        let left = self.unary_expr()?;
        match self.peek() {
            Some(&Token::EqEq) => {
                self.next();
                let right = self.unary_expr()?;
                Ok(Expr::Eq(Box::new(left), Box::new(right)))
            }
            Some(&Token::NotEq) => {
                self.next();
                let right = self.unary_expr()?;
                Ok(Expr::Ne(Box::new(left), Box::new(right)))
            }
            _ => Ok(left),
        }
    }

    fn unary_expr(&mut self) -> Result<Expr, EvalError> {
        if self.peek() == Some(&Token::Not) {
            self.next();
            return Ok(Expr::Not(Box::new(self.unary_expr()?)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, EvalError> {
        match self.next() {
            Some(Token::Bool(b)) => Ok(Expr::Lit(ConditionValue::Bool(b))),
            Some(Token::Int(n)) => Ok(Expr::Lit(ConditionValue::Int(n))),
            Some(Token::Str(s)) => Ok(Expr::Lit(ConditionValue::Str(s))),
            Some(Token::Ident(name)) => Ok(Expr::Name(name)),
            Some(Token::LParen) => {
                let inner = self.expression()?;
                match self.next() {
                    Some(Token::RParen) => Ok(inner),
                    Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
                    None => Err(EvalError::UnexpectedEnd),
                }
            }
            Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

fn eval(expr: &Expr, conditions: &Conditions) -> Result<ConditionValue, EvalError> {
    match expr {
        Expr::Lit(value) => Ok(value.clone()),
        Expr::Name(name) => conditions
            .resolve(name)
            .ok_or_else(|| EvalError::UnknownName(name.clone())),
        Expr::Not(operand) => Ok(ConditionValue::Bool(!eval_bool(operand, conditions)?)),
        Expr::Eq(left, right) => Ok(ConditionValue::Bool(values_equal(
            &eval(left, conditions)?,
            &eval(right, conditions)?,
        ))),
        Expr::Ne(left, right) => Ok(ConditionValue::Bool(!values_equal(
            &eval(left, conditions)?,
            &eval(right, conditions)?,
        ))),
        Expr::And(left, right) => {
            if !eval_bool(left, conditions)? {
                return Ok(ConditionValue::Bool(false));
            }
            Ok(ConditionValue::Bool(eval_bool(right, conditions)?))
        }
        Expr::Or(left, right) => {
            if eval_bool(left, conditions)? {
                return Ok(ConditionValue::Bool(true));
            }
            Ok(ConditionValue::Bool(eval_bool(right, conditions)?))
        }
    }
}

fn eval_bool(expr: &Expr, conditions: &Conditions) -> Result<bool, EvalError> {
    as_bool(eval(expr, conditions)?)
}

/// Equality across value types: mismatched types compare unequal
fn values_equal(left: &ConditionValue, right: &ConditionValue) -> bool {
    match (left, right) {
        (ConditionValue::Bool(a), ConditionValue::Bool(b)) => a == b,
        (ConditionValue::Str(a), ConditionValue::Str(b)) => a == b,
        (ConditionValue::Int(a), ConditionValue::Int(b)) => a == b,
        _ => false,
    }
}

fn as_bool(value: ConditionValue) -> Result<bool, EvalError> {
    match value {
        ConditionValue::Bool(b) => Ok(b),
        ConditionValue::Str(s) => Err(EvalError::NotABool(format!("'{}'", s))),
        ConditionValue::Int(n) => Err(EvalError::NotABool(n.to_string())),
    }
}
