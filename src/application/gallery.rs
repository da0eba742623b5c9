// SPDX-License-Identifier: MPL-2.0
//! Gallery state: the fetched photo sequence, its pager and view mode.
//!
//! A gallery is fetched once per session. A failed fetch stays failed until
//! [`GalleryState::retry`] is called; there is no automatic backoff.

use crate::application::port::{PhotoSource, SourceError};
use crate::application::query::Pagination;
use crate::config::{GalleryConfig, UrlStrategy, ViewMode};
use crate::domain::photo::{PhotoRecord, PhotoSequence};
use crate::error::ViewerError;
use crate::ui::state::device::ViewportSignals;
use crate::ui::viewer::component::{Effect, ViewerSession};
use crate::ui::viewer::settings::ViewerSettings;
use std::sync::Arc;

/// A successfully fetched gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    sequence: PhotoSequence,
    pagination: Pagination,
    view_mode: ViewMode,
    url_strategy: UrlStrategy,
}

impl Gallery {
    #[must_use]
    pub fn new(sequence: PhotoSequence, config: &GalleryConfig) -> Self {
        let pagination = Pagination::new(sequence.len(), config.page_size);
        Self {
            sequence,
            pagination,
            view_mode: config.view_mode,
            url_strategy: config.url_strategy,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &PhotoSequence {
        &self.sequence
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Photos on the current page.
    #[must_use]
    pub fn page_items(&self) -> &[PhotoRecord] {
        let range = self.pagination.range();
        self.sequence.as_slice().get(range).unwrap_or_default()
    }

    /// URL the grid shows for `photo`.
    #[must_use]
    pub fn tile_url<'a>(&self, photo: &'a PhotoRecord) -> &'a str {
        self.url_strategy.select(photo)
    }

    /// Opens the viewer on the photo at `global_index` of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::EmptySequence`] if the gallery has no photos.
    pub fn open_viewer(
        &self,
        global_index: usize,
        settings: ViewerSettings,
        signals: ViewportSignals,
    ) -> Result<(ViewerSession, Vec<Effect>), ViewerError> {
        log::debug!("opening viewer at {global_index} of {}", self.sequence.len());
        ViewerSession::open(self.sequence.clone(), global_index, settings, signals)
    }

    /// Opens the viewer on the tile at `local_index` of the current page.
    ///
    /// Returns `None` if the page has no such tile.
    pub fn open_from_page(
        &self,
        local_index: usize,
        settings: ViewerSettings,
        signals: ViewportSignals,
    ) -> Option<Result<(ViewerSession, Vec<Effect>), ViewerError>> {
        let global = self.pagination.global_index(local_index)?;
        Some(self.open_viewer(global, settings, signals))
    }
}

/// Loading state of the gallery.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GalleryState {
    /// A fetch is needed or in progress.
    #[default]
    Loading,
    /// Photos are available.
    Ready(Gallery),
    /// The last fetch failed.
    Failed(SourceError),
}

impl GalleryState {
    /// Builds the state from a fetch result.
    #[must_use]
    pub fn from_fetch(result: Result<Vec<PhotoRecord>, SourceError>, config: &GalleryConfig) -> Self {
        let photos = match result {
            Ok(photos) => photos,
            Err(err) => {
                log::error!("failed to fetch photos: {err}");
                return Self::Failed(err);
            }
        };
        match PhotoSequence::new(photos) {
            Ok(sequence) => {
                log::info!("gallery loaded with {} photos", sequence.len());
                Self::Ready(Gallery::new(sequence, config))
            }
            Err(duplicate) => {
                log::error!("listing repeats photo id {}", duplicate.0.as_str());
                Self::Failed(SourceError::Parse(format!(
                    "duplicate photo id {}",
                    duplicate.0.as_str()
                )))
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn gallery(&self) -> Option<&Gallery> {
        match self {
            Self::Ready(gallery) => Some(gallery),
            _ => None,
        }
    }

    pub fn gallery_mut(&mut self) -> Option<&mut Gallery> {
        match self {
            Self::Ready(gallery) => Some(gallery),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&SourceError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Moves a failed gallery back to loading. Returns false otherwise.
    pub fn retry(&mut self) -> bool {
        if matches!(self, Self::Failed(_)) {
            log::info!("retrying photo fetch");
            *self = Self::Loading;
            true
        } else {
            false
        }
    }

    /// Fetches from `source` if the gallery is still loading.
    pub async fn load(
        &mut self,
        source: Arc<dyn PhotoSource>,
        folder: &str,
        config: &GalleryConfig,
    ) {
        if !self.is_loading() {
            return;
        }
        let result = fetch_sequence(source, folder.to_string()).await;
        *self = Self::from_fetch(result, config);
    }

    /// Opens the viewer if the gallery is ready.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::EmptySequence`] while loading, after a failure,
    /// or if the gallery has no photos.
    pub fn open_viewer(
        &self,
        global_index: usize,
        settings: ViewerSettings,
        signals: ViewportSignals,
    ) -> Result<(ViewerSession, Vec<Effect>), ViewerError> {
        self.gallery()
            .ok_or(ViewerError::EmptySequence)?
            .open_viewer(global_index, settings, signals)
    }
}

/// Lists `folder` on the blocking pool.
///
/// # Errors
///
/// Returns the source's error, or [`SourceError::Storage`] if the blocking
/// task could not complete.
pub async fn fetch_sequence(
    source: Arc<dyn PhotoSource>,
    folder: String,
) -> Result<Vec<PhotoRecord>, SourceError> {
    tokio::task::spawn_blocking(move || source.list(&folder))
        .await
        .map_err(|err| SourceError::Storage(format!("listing task failed: {err}")))?
}
