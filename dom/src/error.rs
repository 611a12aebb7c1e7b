use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed document")]
    MalformedDocument,
    #[error("document has no root element")]
    EmptyDocument,
    #[error("element `{0}` has both a value and child elements")]
    MixedContent(String),
    #[error("document nests elements deeper than {0} levels")]
    TooDeep(usize),
    #[error("element not found")]
    NotFound,
    #[error(transparent)]
    Parse(#[from] simplexml_parser::error::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
