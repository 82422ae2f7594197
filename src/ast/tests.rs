//! Unit tests for AST construction and display.

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    ast::{Expr, Program, Stmt},
    expressions::IdentifierExpr,
    statements::{BindingStmt, ReturnStmt},
};

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr::new(Token::new(TokenKind::Identifier, name))
}

#[test]
fn test_binding_display() {
    let program = Program {
        statements: vec![Stmt::Binding(BindingStmt {
            token: Token::new(TokenKind::Karma, "karma"),
            name: ident("myVar"),
            value: Expr::Identifier(ident("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "karma myVar = anotherVar;");
}

#[test]
fn test_unparsed_value_display() {
    let stmt = Stmt::Binding(BindingStmt {
        token: Token::new(TokenKind::Karma, "karma"),
        name: ident("x"),
        value: Expr::Unparsed,
    });

    assert_eq!(stmt.to_string(), "karma x = ;");
}

#[test]
fn test_return_display() {
    let stmt = Stmt::Return(ReturnStmt {
        token: Token::new(TokenKind::Return, "return"),
        value: Expr::Identifier(ident("result")),
    });

    assert_eq!(stmt.to_string(), "return result;");
    assert_eq!(stmt.token_literal(), "return");
}

#[test]
fn test_identifier_value_matches_token() {
    let name = ident("five");

    assert_eq!(name.value, "five");
    assert_eq!(name.token.value, name.value);
}

#[test]
fn test_program_token_literal() {
    assert_eq!(Program::default().token_literal(), "");
    assert!(Program::default().is_empty());

    let program = Program {
        statements: vec![Stmt::Return(ReturnStmt {
            token: Token::new(TokenKind::Return, "return"),
            value: Expr::Unparsed,
        })],
    };
    assert_eq!(program.token_literal(), "return");
}
