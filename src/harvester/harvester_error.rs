use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum HarvestError {
    Network(String),
    InvalidUrl(String),
    HtmlParse(String),
    Pattern(String),
}

impl fmt::Display for HarvestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarvestError::Network(msg) => write!(f, "Network error: {msg}"),
            HarvestError::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            HarvestError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            HarvestError::Pattern(msg) => write!(f, "Pattern error: {msg}"),
        }
    }
}

impl Error for HarvestError {}
