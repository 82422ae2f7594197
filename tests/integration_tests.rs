//! Integration tests for the front end.
//!
//! These tests drive the public API end to end, from source text through
//! tokenization to the parsed program and its error list.

use karma::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
    parse,
    parser::parser::Parser,
};

#[test]
fn test_two_bindings_in_source_order() {
    let (program, errors) = parse("karma x = 5; karma y = 10;");

    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 2);

    let names: Vec<&str> = program
        .statements()
        .iter()
        .map(|stmt| match stmt {
            Stmt::Binding(binding) => binding.name.value.as_str(),
            Stmt::Return(_) => panic!("unexpected return statement"),
        })
        .collect();
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn test_mixed_program() {
    let source = "
        karma five = 5;
        karma add = fun(x, y) { x + y; };
        if (five < 10) { return true; } else { return false; }
        return add(five, 10);
    ";
    let (program, errors) = parse(source);

    assert!(errors.is_empty());

    let kinds: Vec<&str> = program
        .statements()
        .iter()
        .map(|stmt| match stmt {
            Stmt::Binding(_) => "binding",
            Stmt::Return(_) => "return",
        })
        .collect();

    // `karma add = fun ...` steps over `fun` only; the rest of the literal,
    // including `x + y;`, is skipped token by token.
    assert_eq!(
        kinds,
        vec!["binding", "binding", "return", "return", "return"]
    );
}

#[test]
fn test_partial_program_with_errors() {
    let (program, errors) = parse("karma a = 1; karma b; karma = 3; karma c = 4;");

    assert_eq!(
        errors,
        vec![
            Error::UnexpectedPeek {
                expected: TokenKind::Assignment,
                found: TokenKind::Semicolon,
            },
            Error::UnexpectedPeek {
                expected: TokenKind::Identifier,
                found: TokenKind::Assignment,
            },
        ]
    );
    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.to_string(), "karma a = ;karma c = ;");
}

#[test]
fn test_value_slots_are_unparsed() {
    let (program, _) = parse("karma a = b; return a;");

    for stmt in program.statements() {
        let value = match stmt {
            Stmt::Binding(binding) => &binding.value,
            Stmt::Return(ret) => &ret.value,
        };
        assert_eq!(*value, Expr::Unparsed);
    }
}

#[test]
fn test_single_character_stream_then_eof() {
    let source = "+-*/<>(){},;";
    let mut lexer = Lexer::new(source);

    for ch in source.chars() {
        let token = lexer.next_token();
        assert_eq!(token.value, ch.to_string());
        assert_ne!(token.kind, TokenKind::Illegal);
    }
    assert_eq!(lexer.next_token(), Token::eof());
}

#[test]
fn test_tokenize_matches_lexer() {
    let source = "karma x = 10 != 9;";
    let mut lexer = Lexer::new(source);

    for token in tokenize(source) {
        assert_eq!(lexer.next_token(), token);
    }
}

#[test]
fn test_parsing_twice_is_deterministic() {
    let source = "karma x = 5; return 1; karma y = 2;";

    let mut first = Parser::new(Lexer::new(source));
    let mut second = Parser::new(Lexer::new(source));

    assert_eq!(first.parse_program(), second.parse_program());
    assert_eq!(first.errors(), second.errors());
}

#[test]
fn test_parse_program_after_eof_is_empty() {
    let mut parser = Parser::new(Lexer::new("karma x = 5;"));

    assert_eq!(parser.parse_program().statements.len(), 1);
    assert!(parser.parse_program().is_empty());
}
