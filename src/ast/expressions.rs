use std::fmt::Display;

use crate::lexer::tokens::Token;

/// Identifier Expression
/// A name, either as a binding target or as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierExpr {
    pub token: Token,
    pub value: String,
}

impl IdentifierExpr {
    pub fn new(token: Token) -> Self {
        let value = token.value.clone();
        IdentifierExpr { token, value }
    }
}

impl Display for IdentifierExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
