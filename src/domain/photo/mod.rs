// SPDX-License-Identifier: MPL-2.0
//! Photo records and the ordered sequence a viewing session navigates.
//!
//! A [`PhotoRecord`] is immutable once fetched from a photo source. The viewer
//! only ever references records; it never mutates them. Two records denote the
//! same photo when their ids match, regardless of URL changes.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Bytes per megabyte used for human-readable sizes.
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Identifier of a photo, unique within a viewing session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(String);

impl PhotoId {
    /// Creates a new photo id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable descriptor of one viewable image.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoRecord {
    /// Unique id within the session.
    pub id: PhotoId,
    /// Full-resolution URL shown in the viewer.
    pub display_url: String,
    /// Smaller rendition used by the grid.
    pub thumbnail_url: String,
    /// File name as reported by the source.
    pub name: String,
    /// Size in bytes, when the source reports it.
    pub byte_size: Option<u64>,
    /// MIME type, when the source reports it.
    pub mime_type: Option<String>,
}

impl PhotoRecord {
    /// Creates a record whose thumbnail is the display URL.
    #[must_use]
    pub fn new(id: impl Into<String>, display_url: impl Into<String>, name: impl Into<String>) -> Self {
        let display_url = display_url.into();
        Self {
            id: PhotoId::new(id),
            thumbnail_url: display_url.clone(),
            display_url,
            name: name.into(),
            byte_size: None,
            mime_type: None,
        }
    }

    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = url.into();
        self
    }

    #[must_use]
    pub fn with_byte_size(mut self, size: Option<u64>) -> Self {
        self.byte_size = size;
        self
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime: Option<String>) -> Self {
        self.mime_type = mime;
        self
    }

    /// Returns true if both records denote the same photo.
    #[must_use]
    pub fn same_photo(&self, other: &PhotoRecord) -> bool {
        self.id == other.id
    }

    /// Returns the name without its last extension.
    #[must_use]
    pub fn title(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.name,
        }
    }

    /// Formats the size in megabytes with two decimals, or `--` when unknown.
    #[must_use]
    pub fn size_label(&self) -> String {
        match self.byte_size {
            #[allow(clippy::cast_precision_loss)]
            Some(bytes) => format!("{:.2} MB", bytes as f64 / BYTES_PER_MB),
            None => "--".to_string(),
        }
    }
}

/// Error raised when a sequence would contain the same id twice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("duplicate photo id: {0}")]
pub struct DuplicatePhotoId(pub PhotoId);

/// Ordered, indexable list of photos defining navigation order.
///
/// The sequence is stable for the lifetime of a viewing session: it is shared
/// behind an `Arc` and never mutated, so index arithmetic done by the viewer
/// stays valid until the session ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoSequence {
    photos: Arc<[PhotoRecord]>,
}

impl PhotoSequence {
    /// Builds a sequence, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicatePhotoId`] with the first id seen twice.
    pub fn new(photos: Vec<PhotoRecord>) -> Result<Self, DuplicatePhotoId> {
        let mut seen = std::collections::HashSet::with_capacity(photos.len());
        for photo in &photos {
            if !seen.insert(photo.id.as_str()) {
                return Err(DuplicatePhotoId(photo.id.clone()));
            }
        }
        Ok(Self {
            photos: photos.into(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PhotoRecord> {
        self.photos.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhotoRecord> {
        self.photos.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PhotoRecord] {
        &self.photos
    }

    /// Finds the index of the photo with the given id.
    #[must_use]
    pub fn position(&self, id: &PhotoId) -> Option<usize> {
        self.photos.iter().position(|p| &p.id == id)
    }

    /// Clamps an index into `0..len`. Returns `None` for an empty sequence.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> Option<usize> {
        if self.photos.is_empty() {
            None
        } else {
            Some(index.min(self.photos.len() - 1))
        }
    }
}
