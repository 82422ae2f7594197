#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use parser::parser::parse;

/// Renders an error the way the REPL prints it:
///
/// ```text
/// Error: UnexpectedPeek (did you forget the `=` after the name?)
///   expected next token to be =, got ; instead
/// ```
pub fn format_error(error: &Error) -> String {
    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n  {}", header, error)
}

#[cfg(test)]
mod tests {
    use crate::{errors::errors::Error, lexer::tokens::TokenKind};

    #[test]
    fn test_format_error_with_tip() {
        let error = Error::UnexpectedPeek {
            expected: TokenKind::Assignment,
            found: TokenKind::Semicolon,
        };

        assert_eq!(
            super::format_error(&error),
            "Error: UnexpectedPeek (did you forget the `=` after the name?)\n  expected next token to be =, got ; instead"
        );
    }

    #[test]
    fn test_format_error_without_tip() {
        let error = Error::UnexpectedPeek {
            expected: TokenKind::Semicolon,
            found: TokenKind::EOF,
        };

        assert_eq!(
            super::format_error(&error),
            "Error: UnexpectedPeek\n  expected next token to be ;, got EOF instead"
        );
    }
}
