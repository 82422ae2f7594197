use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_RUN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref NUMBER_RUN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Pull-based scanner over a fully loaded source string.
///
/// Each call to [`Lexer::next_token`] yields exactly one token. Once the input
/// is exhausted every further call returns an `EOF` token.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    /// Index of `ch` in `source`
    pos: usize,
    /// Index of the next byte to read
    read_pos: usize,
    /// Byte under the cursor, `None` past the end
    ch: Option<u8>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            source: source.into(),
            pos: 0,
            read_pos: 0,
            ch: None,
        };
        lexer.advance();
        lexer
    }

    fn advance(&mut self) {
        self.ch = self.source.as_bytes().get(self.read_pos).copied();
        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.read_pos).copied()
    }

    /// Everything from the cursor onwards. Only called while `ch` is ASCII,
    /// so `pos` always sits on a char boundary.
    fn remainder(&self) -> &str {
        self.source.get(self.pos..).unwrap_or("")
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.advance();
        }
    }

    /// Consumes the maximal match of `regex` at the cursor and returns it.
    fn read_run(&mut self, regex: &Regex) -> String {
        let matched = regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        self.advance_n(matched.len());
        matched
    }

    /// Builds `two_char_kind` if the byte after the cursor is `second`,
    /// otherwise `single_kind`. Leaves the cursor on the last byte used.
    fn two_char_token(&mut self, second: u8, two_char_kind: TokenKind, single_kind: TokenKind) -> Token {
        let first = self.ch.map(char::from).unwrap_or_default();

        if self.peek() == Some(second) {
            self.advance();
            let mut value = String::from(first);
            value.push(char::from(second));
            MK_TOKEN!(two_char_kind, value)
        } else {
            MK_TOKEN!(single_kind, first)
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = match self.ch {
            Some(ch) => ch,
            None => return Token::eof(),
        };

        let token = match ch {
            b'=' => self.two_char_token(b'=', TokenKind::Equals, TokenKind::Assignment),
            b'!' => self.two_char_token(b'=', TokenKind::NotEquals, TokenKind::Not),
            b'+' => MK_TOKEN!(TokenKind::Plus, "+"),
            b'-' => MK_TOKEN!(TokenKind::Dash, "-"),
            b'*' => MK_TOKEN!(TokenKind::Star, "*"),
            b'/' => MK_TOKEN!(TokenKind::Slash, "/"),
            b'<' => MK_TOKEN!(TokenKind::Less, "<"),
            b'>' => MK_TOKEN!(TokenKind::Greater, ">"),
            b',' => MK_TOKEN!(TokenKind::Comma, ","),
            b';' => MK_TOKEN!(TokenKind::Semicolon, ";"),
            b'(' => MK_TOKEN!(TokenKind::OpenParen, "("),
            b')' => MK_TOKEN!(TokenKind::CloseParen, ")"),
            b'{' => MK_TOKEN!(TokenKind::OpenCurly, "{"),
            b'}' => MK_TOKEN!(TokenKind::CloseCurly, "}"),
            // Runs already leave the cursor past their last byte, so they
            // return before the trailing advance below.
            ch if is_letter(ch) => {
                let value = self.read_run(&IDENTIFIER_RUN);
                let token = MK_TOKEN!(lookup_ident(&value), value);
                trace!("scanned {}", token);
                return token;
            }
            ch if ch.is_ascii_digit() => {
                let value = self.read_run(&NUMBER_RUN);
                let token = MK_TOKEN!(TokenKind::Number, value);
                trace!("scanned {}", token);
                return token;
            }
            ch => MK_TOKEN!(TokenKind::Illegal, char::from(ch)),
        };

        self.advance();
        trace!("scanned {}", token);
        token
    }
}

/// Yields tokens up to, but not including, the first `EOF`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Scans the whole of `source`, including the terminating `EOF` token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let at_eof = token.is(TokenKind::EOF);
        tokens.push(token);

        if at_eof {
            break;
        }
    }

    tokens
}
