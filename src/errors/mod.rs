//! Error types for the parser.
//!
//! The front end has a single error kind: the token after the cursor was not
//! the kind the grammar required. Errors are accumulated by the parser rather
//! than returned, so one bad statement never stops the rest of the parse.

pub mod errors;
