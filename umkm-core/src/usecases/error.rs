use crate::{
    entities::{ParseMoodError, UnknownCategory},
    repositories,
    util::validate::CoordinateInvalidation,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is missing")]
    Name,
    #[error("The description is missing")]
    Description,
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(#[from] CoordinateInvalidation),
    #[error("The point does not exist")]
    PointNotFound,
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown mood: {0}")]
    UnknownMood(String),
    #[error(transparent)]
    Repo(repositories::Error),
}

impl From<repositories::Error> for Error {
    fn from(from: repositories::Error) -> Self {
        match from {
            repositories::Error::NotFound => Self::PointNotFound,
            err => Self::Repo(err),
        }
    }
}

impl From<UnknownCategory> for Error {
    fn from(from: UnknownCategory) -> Self {
        Self::UnknownCategory(from.0)
    }
}

impl From<ParseMoodError> for Error {
    fn from(from: ParseMoodError) -> Self {
        Self::UnknownMood(from.0)
    }
}
