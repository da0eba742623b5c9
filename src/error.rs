// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error types.
//!
//! Port-specific errors such as [`SourceError`] live beside their ports and
//! convert into [`Error`] so composition code can use `?`.

use crate::application::port::source::SourceError;
use crate::domain::photo::{DuplicatePhotoId, PhotoId};
use thiserror::Error;

/// Top-level error for the gallery and its composition root.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed or serialized.
    #[error("Config error: {0}")]
    Config(String),

    /// The photo source failed.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Errors raised when constructing a viewer session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// There is nothing to show.
    #[error("cannot open a viewer on an empty sequence")]
    EmptySequence,

    /// Two records share an id.
    #[error("duplicate photo id: {0}")]
    DuplicatePhotoId(PhotoId),
}

impl From<DuplicatePhotoId> for ViewerError {
    fn from(err: DuplicatePhotoId) -> Self {
        ViewerError::DuplicatePhotoId(err.0)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
