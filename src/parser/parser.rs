//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser reads its tokens lazily from an owned `Lexer`, one at a time,
//! through a fixed two-token window. It maintains:
//! - The `current` and `peek` tokens
//! - A statement handler lookup table
//! - The ordered list of errors recorded so far

use std::collections::HashMap;

use log::warn;

use crate::{
    ast::ast::Program,
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    /// Token under the cursor
    current: Token,
    /// Token after the cursor
    peek: Token,
    /// Errors in the order they were detected
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a new Parser with `current` and `peek` filled from `lexer`.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::eof(),
            peek: Token::eof(),
            errors: vec![],
            stmt_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Shifts the window by one token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances if the peek token has the expected kind and returns the new
    /// current token. Otherwise records an error and leaves the window alone.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Option<&Token> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Some(&self.current)
        } else {
            self.peek_error(expected_kind);
            None
        }
    }

    fn peek_error(&mut self, expected_kind: TokenKind) {
        let error = Error::UnexpectedPeek {
            expected: expected_kind,
            found: self.peek.kind,
        };
        warn!("{}", error);
        self.errors.push(error);
    }

    /// All errors recorded so far, in detection order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until `EOF`.
    ///
    /// Each iteration dispatches on the current token and then advances once,
    /// whether or not a statement was produced.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        program
    }
}

/// Parses `source` into a program along with every error recorded on the way.
///
/// A non-empty error list does not discard the statements that did parse.
pub fn parse(source: impl Into<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.errors().to_vec())
}
