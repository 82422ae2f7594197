use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedPeek { expected: TokenKind, found: TokenKind },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::UnexpectedPeek { .. } => "UnexpectedPeek",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::UnexpectedPeek { expected: TokenKind::Identifier, .. } => {
                ErrorTip::Suggestion(String::from("a binding needs a name, e.g. `karma x = 5;`"))
            }
            Error::UnexpectedPeek { expected: TokenKind::Assignment, .. } => {
                ErrorTip::Suggestion(String::from("did you forget the `=` after the name?"))
            }
            Error::UnexpectedPeek { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
