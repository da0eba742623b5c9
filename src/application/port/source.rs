// SPDX-License-Identifier: MPL-2.0
//! Photo source port definition.
//!
//! A [`PhotoSource`] turns a folder name into an ordered list of photo
//! records. Network clients for the object-storage bucket or the file-server
//! share implement it; so does the on-disk listing adapter.

use crate::domain::photo::PhotoRecord;
use thiserror::Error;

/// Errors that can occur while listing photos.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the credentials or share.
    #[error("access denied")]
    Unauthorized,

    /// The backend answered with an error of its own.
    #[error("storage error: {0}")]
    Storage(String),

    /// The listing payload could not be understood.
    #[error("malformed listing: {0}")]
    Parse(String),

    /// The folder does not exist.
    #[error("folder not found: {0}")]
    NotFound(String),
}

/// Lists the photos of a folder in display order.
pub trait PhotoSource: Send + Sync {
    /// Returns the photos of `folder`, already sorted for navigation.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] describing why the listing failed.
    fn list(&self, folder: &str) -> Result<Vec<PhotoRecord>, SourceError>;
}
