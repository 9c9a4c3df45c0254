use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum TableError {
    Io(String),
    Csv(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(msg) => write!(f, "I/O error: {msg}"),
            TableError::Csv(msg) => write!(f, "CSV error: {msg}"),
        }
    }
}

impl Error for TableError {}
