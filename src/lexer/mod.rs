//! Lexer module for the search query language

pub mod scanner;
pub mod token;

pub use scanner::*;
pub use token::*;
