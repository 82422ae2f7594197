use std::fmt::Display;

use super::{
    expressions::IdentifierExpr,
    statements::{BindingStmt, ReturnStmt},
};

/// Statement Types
///
/// Every statement kind the parser can produce. Consumers match on this
/// exhaustively, so a new kind has to be handled everywhere it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Binding(BindingStmt),
    Return(ReturnStmt),
}

impl Stmt {
    /// Literal of the keyword that introduced the statement.
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::Binding(stmt) => &stmt.token.value,
            Stmt::Return(stmt) => &stmt.token.value,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Binding(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression Types
///
/// `Unparsed` fills value slots until expression parsing exists; readers
/// have to handle it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Unparsed,
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(ident) => write!(f, "{}", ident),
            Expr::Unparsed => Ok(()),
        }
    }
}

/// Root of the tree: the top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Stmt::token_literal)
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
