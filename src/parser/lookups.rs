use std::collections::HashMap;

use crate::{ast::ast::Stmt, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Option<Stmt>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Statements
    parser.stmt(TokenKind::Karma, parse_binding_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup table inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
