pub mod league;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("Unexpected type for {0}")]
    InvalidType(String),
}
