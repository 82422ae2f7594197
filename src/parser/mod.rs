//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from a lexer and turns
//! them into a `Program`. It keeps a two-token window (`current`, `peek`)
//! and dispatches on the current token through a statement lookup table:
//!
//! - Binding statements (`karma x = ...;`)
//! - Return statements (`return ...;`)
//! - Anything else is skipped without producing a node
//!
//! Errors are recorded on the parser and never stop the parse.

pub mod lookups;
pub mod parser;
pub mod stmt;
