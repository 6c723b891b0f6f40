//! Error type for parsing primitive values.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid field element: {0}")]
    InvalidFelt(String),

    #[error("value does not fit in a field element: {0}")]
    FeltOverflow(String),

    #[error("short string is {0} bytes, at most 31 allowed")]
    ShortStringTooLong(usize),

    #[error("short string must be ASCII")]
    NonAsciiShortString,

    #[error("invalid quest id: {0}")]
    InvalidQuestId(String),
}
