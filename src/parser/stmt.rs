use log::debug;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::IdentifierExpr,
        statements::{BindingStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Dispatches on the current token. Tokens that do not start a known
/// statement yield `None` and are not reported.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    let kind = parser.current_token_kind();

    match parser.get_stmt_lookup().get(&kind).copied() {
        Some(handler) => handler(parser),
        None => {
            debug!("skipping {}", parser.current_token());
            None
        }
    }
}

/// `karma <identifier> = <expression>;`
///
/// The value is not parsed yet: after the `=` exactly one token is stepped
/// over and the slot is left as `Expr::Unparsed`.
pub fn parse_binding_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    let name = IdentifierExpr::new(parser.expect_peek(TokenKind::Identifier)?.clone());
    parser.expect_peek(TokenKind::Assignment)?;

    if !parser.current_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    debug!("parsed binding of `{}`", name.value);
    Some(Stmt::Binding(BindingStmt {
        token,
        name,
        value: Expr::Unparsed,
    }))
}

/// `return <expression>;`
///
/// Everything up to the terminating `;` is discarded. Hitting `EOF` also
/// ends the statement.
pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    parser.advance();

    while !parser.current_token_is(TokenKind::Semicolon)
        && !parser.current_token_is(TokenKind::EOF)
    {
        parser.advance();
    }

    debug!("parsed return");
    Some(Stmt::Return(ReturnStmt {
        token,
        value: Expr::Unparsed,
    }))
}
