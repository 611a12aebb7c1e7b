use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("syntax error at line {line}, column {column} near {near:?}")]
    Syntax {
        line: usize,
        column: usize,
        near: String,
    },
    #[error("invalid reference at line {line}, column {column}")]
    Reference { line: usize, column: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
