// SPDX-License-Identifier: MPL-2.0
//! Listing adapters for the two photo backends.
//!
//! Both backends answer a folder listing with JSON. This module turns those
//! payloads into [`PhotoRecord`]s in navigation order:
//!
//! - **Object storage**: a bare array of objects. Only `image/*` objects are
//!   kept, oldest first.
//! - **File server**: `{ "items": [...] }`. Directories are skipped, newest
//!   first.
//!
//! [`ListingFileSource`] serves saved listings from disk as a [`PhotoSource`].

use crate::application::port::source::{PhotoSource, SourceError};
use crate::config::{SourceConfig, SourceKind};
use crate::domain::photo::PhotoRecord;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::cmp::Reverse;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

// =============================================================================
// Payloads
// =============================================================================

/// One object of a storage bucket listing.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageObject {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub metadata: Option<StorageMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageMetadata {
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// One entry of a file-server share listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileServerItem {
    pub name: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub is_dir: bool,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct FileServerListing {
    #[serde(default)]
    items: Vec<FileServerItem>,
}

// =============================================================================
// Formats
// =============================================================================

/// How to interpret a listing and build photo URLs from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingFormat {
    ObjectStorage { bucket_url: String, bucket: String },
    FileServer { base_url: String, share_id: String },
}

impl ListingFormat {
    /// Builds the format from the `[source]` settings section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a field the backend needs is missing.
    pub fn from_config(source: &SourceConfig) -> Result<Self> {
        let require = |value: &Option<String>, key: &str| {
            value
                .clone()
                .ok_or_else(|| Error::Config(format!("source.{key} is required")))
        };
        match source.kind {
            SourceKind::ObjectStorage => Ok(Self::ObjectStorage {
                bucket_url: require(&source.base_url, "base_url")?,
                bucket: require(&source.bucket, "bucket")?,
            }),
            SourceKind::FileServer => Ok(Self::FileServer {
                base_url: require(&source.base_url, "base_url")?,
                share_id: require(&source.share_id, "share_id")?,
            }),
        }
    }

    /// Parses a listing of `folder` into photos in navigation order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Parse`] if the payload does not match the format.
    pub fn parse(&self, folder: &str, json: &str) -> std::result::Result<Vec<PhotoRecord>, SourceError> {
        match self {
            Self::ObjectStorage { bucket_url, bucket } => {
                let objects: Vec<StorageObject> =
                    serde_json::from_str(json).map_err(|e| SourceError::Parse(e.to_string()))?;
                Ok(storage_photos(objects, bucket_url, bucket))
            }
            Self::FileServer { base_url, share_id } => {
                let listing: FileServerListing =
                    serde_json::from_str(json).map_err(|e| SourceError::Parse(e.to_string()))?;
                Ok(file_server_photos(listing.items, base_url, share_id, folder))
            }
        }
    }
}

// =============================================================================
// Transforms
// =============================================================================

/// Public URL of an object in a storage bucket.
#[must_use]
pub fn storage_object_url(bucket_url: &str, bucket: &str, name: &str) -> String {
    format!(
        "{}/storage/v1/object/public/{bucket}/{name}",
        bucket_url.trim_end_matches('/')
    )
}

/// Public download URL of a file in a file-server share.
#[must_use]
pub fn file_server_url(base_url: &str, share_id: &str, folder: &str, name: &str) -> String {
    format!(
        "{}/api/public/dl/{share_id}/{folder}/{name}",
        base_url.trim_end_matches('/')
    )
}

/// Keeps image objects and orders them oldest first.
///
/// Objects without an id fall back to their name.
#[must_use]
pub fn storage_photos(objects: Vec<StorageObject>, bucket_url: &str, bucket: &str) -> Vec<PhotoRecord> {
    let mut dated: Vec<(Option<DateTime<Utc>>, PhotoRecord)> = objects
        .into_iter()
        .filter_map(|object| {
            let metadata = object.metadata.unwrap_or_default();
            let mime = metadata.mimetype.filter(|m| m.starts_with("image/"))?;
            let url = storage_object_url(bucket_url, bucket, &object.name);
            let id = object.id.unwrap_or_else(|| object.name.clone());
            let record = PhotoRecord::new(id, url, object.name)
                .with_byte_size(metadata.size)
                .with_mime_type(Some(mime));
            Some((parse_timestamp(object.created_at.as_deref()), record))
        })
        .collect();
    dated.sort_by_key(|(created, _)| *created);
    dated.into_iter().map(|(_, record)| record).collect()
}

/// Skips directories and orders files newest first.
#[must_use]
pub fn file_server_photos(
    items: Vec<FileServerItem>,
    base_url: &str,
    share_id: &str,
    folder: &str,
) -> Vec<PhotoRecord> {
    let mut dated: Vec<(Option<DateTime<Utc>>, PhotoRecord)> = items
        .into_iter()
        .filter(|item| !item.is_dir)
        .map(|item| {
            let url = file_server_url(base_url, share_id, folder, &item.name);
            let mime = item.kind.filter(|k| !k.is_empty()).map(|k| {
                if k.contains('/') {
                    k
                } else {
                    format!("{k}/*")
                }
            });
            let record = PhotoRecord::new(encode_component(&item.name), url, item.name)
                .with_byte_size(item.size)
                .with_mime_type(mime);
            (parse_timestamp(item.modified.as_deref()), record)
        })
        .collect();
    dated.sort_by_key(|(modified, _)| Reverse(*modified));
    dated.into_iter().map(|(_, record)| record).collect()
}

/// Parses an RFC 3339 timestamp. Missing or malformed values sort as oldest.
fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?;
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(err) => {
            log::debug!("ignoring malformed timestamp {value:?}: {err}");
            None
        }
    }
}

/// Percent-encodes a URI component, leaving `A-Z a-z 0-9 - _ . ! ~ * ' ( )` as is.
#[must_use]
pub fn encode_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(char::from(byte)),
            _ => {
                out.push('%');
                out.push(char::from(HEX[usize::from(byte >> 4)]));
                out.push(char::from(HEX[usize::from(byte & 0x0F)]));
            }
        }
    }
    out
}

// =============================================================================
// ListingFileSource
// =============================================================================

/// Serves saved listings from `{root}/{folder}.json`.
#[derive(Debug, Clone)]
pub struct ListingFileSource {
    root: PathBuf,
    format: ListingFormat,
}

impl ListingFileSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, format: ListingFormat) -> Self {
        Self {
            root: root.into(),
            format,
        }
    }

    /// Serves a single listing file; its stem is the folder name.
    #[must_use]
    pub fn for_file(path: &Path, format: ListingFormat) -> (Self, String) {
        let root = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let folder = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        (Self::new(root, format), folder)
    }

    fn listing_path(&self, folder: &str) -> PathBuf {
        self.root.join(format!("{folder}.json"))
    }
}

impl PhotoSource for ListingFileSource {
    fn list(&self, folder: &str) -> std::result::Result<Vec<PhotoRecord>, SourceError> {
        let path = self.listing_path(folder);
        let json = fs::read_to_string(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => SourceError::NotFound(folder.to_string()),
            ErrorKind::PermissionDenied => SourceError::Unauthorized,
            _ => SourceError::Storage(format!("{}: {err}", path.display())),
        })?;
        let photos = self.format.parse(folder, &json)?;
        log::info!("listed {} photos from {}", photos.len(), path.display());
        Ok(photos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_format() -> ListingFormat {
        ListingFormat::ObjectStorage {
            bucket_url: "https://proj.supabase.test/".to_string(),
            bucket: "photos".to_string(),
        }
    }

    #[test]
    fn storage_listing_keeps_images_oldest_first() {
        let json = r#"[
            {"name": "b.jpg", "id": "2", "created_at": "2024-03-02T10:00:00Z",
             "metadata": {"mimetype": "image/jpeg", "size": 2048}},
            {"name": "notes.txt", "id": "3", "created_at": "2024-03-01T10:00:00Z",
             "metadata": {"mimetype": "text/plain", "size": 10}},
            {"name": "a.png", "id": "1", "created_at": "2024-03-01T09:00:00Z",
             "metadata": {"mimetype": "image/png"}},
            {"name": "folder", "id": null, "metadata": null}
        ]"#;
        let photos = storage_format().parse("ignored", json).expect("valid listing");

        let names: Vec<&str> = photos.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a.png", "b.jpg"]);
        assert_eq!(
            photos[0].display_url,
            "https://proj.supabase.test/storage/v1/object/public/photos/a.png"
        );
        assert_eq!(photos[0].thumbnail_url, photos[0].display_url);
        assert_eq!(photos[1].byte_size, Some(2048));
        assert_eq!(photos[1].mime_type.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn file_server_listing_skips_dirs_newest_first() {
        let format = ListingFormat::FileServer {
            base_url: "https://files.test".to_string(),
            share_id: "s1".to_string(),
        };
        let json = r#"{"items": [
            {"name": "old photo.jpg", "size": 100, "modified": "2023-01-01T00:00:00+03:00",
             "isDir": false, "type": "image"},
            {"name": "sub", "isDir": true, "modified": "2025-01-01T00:00:00Z"},
            {"name": "new.jpg", "size": 200, "modified": "2024-06-01T12:00:00Z",
             "isDir": false, "type": "image"}
        ]}"#;
        let photos = format.parse("hdr", json).expect("valid listing");

        let names: Vec<&str> = photos.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["new.jpg", "old photo.jpg"]);
        assert_eq!(photos[1].id.as_str(), "old%20photo.jpg");
        assert_eq!(
            photos[0].display_url,
            "https://files.test/api/public/dl/s1/hdr/new.jpg"
        );
        assert_eq!(photos[0].mime_type.as_deref(), Some("image/*"));
    }

    #[test]
    fn malformed_payload_is_parse_error() {
        let err = storage_format().parse("x", "{not json").unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn malformed_dates_sort_as_oldest() {
        let json = r#"[
            {"name": "dated.jpg", "created_at": "2024-01-01T00:00:00Z",
             "metadata": {"mimetype": "image/jpeg"}},
            {"name": "undated.jpg", "created_at": "yesterday",
             "metadata": {"mimetype": "image/jpeg"}}
        ]"#;
        let photos = storage_format().parse("x", json).expect("valid listing");
        assert_eq!(photos[0].name, "undated.jpg");
        assert_eq!(photos[0].id.as_str(), "undated.jpg");
    }

    #[test]
    fn encode_component_matches_uri_rules() {
        assert_eq!(encode_component("a b.jpg"), "a%20b.jpg");
        assert_eq!(encode_component("it's(1)!.png"), "it's(1)!.png");
        assert_eq!(encode_component("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(encode_component("фото"), "%D1%84%D0%BE%D1%82%D0%BE");
    }

    #[test]
    fn from_config_requires_backend_fields() {
        let mut source = SourceConfig::default();
        assert!(ListingFormat::from_config(&source).is_err());

        source.base_url = Some("https://b.test".to_string());
        source.bucket = Some("photos".to_string());
        assert_eq!(
            ListingFormat::from_config(&source).expect("complete config"),
            ListingFormat::ObjectStorage {
                bucket_url: "https://b.test".to_string(),
                bucket: "photos".to_string(),
            }
        );
    }

    #[test]
    fn for_file_splits_root_and_folder() {
        let (source, folder) =
            ListingFileSource::for_file(Path::new("/data/listings/hdr.json"), storage_format());
        assert_eq!(folder, "hdr");
        assert_eq!(source.listing_path("hdr"), Path::new("/data/listings/hdr.json"));
    }
}
