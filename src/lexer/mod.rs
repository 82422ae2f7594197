//! Lexical analysis for Karma source text.
//!
//! The lexer is a pull-based scanner: each call to `Lexer::next_token`
//! classifies the next lexeme. It handles:
//!
//! - Single and two-character operators (`=`/`==`, `!`/`!=`)
//! - Keywords and identifiers, via the reserved-word lookup table
//! - Integer literals
//! - Unrecognised bytes, which become `Illegal` tokens rather than errors

pub mod lexer;
pub mod tokens;
