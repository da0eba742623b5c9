// SPDX-License-Identifier: MPL-2.0
//! Neighbour preload cache for faster navigation.
//!
//! Tracks which image URLs the loader has already warmed so that moving to an
//! adjacent photo is served from the browser or decoder cache.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used URLs are forgotten first
//! - **Count-bounded**: Capacity is configurable, see `[preload]` settings
//! - **Idempotent**: Inserting a warm URL again is a no-op
//! - **In-flight aware**: URLs already requested are never requested twice
//!   while they are remembered; unanswered requests share the same LRU bound

use crate::config::{
    PreloadSection, DEFAULT_PRELOAD_CAPACITY, MAX_PRELOAD_CAPACITY, MIN_PRELOAD_CAPACITY,
};
use crate::domain::ui::newtypes::PreloadDepth;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Configuration for the preload cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadConfig {
    /// Neighbours warmed in each direction.
    pub depth: PreloadDepth,

    /// Maximum number of warm URLs remembered.
    pub capacity: usize,

    /// Whether preloading is enabled.
    pub enabled: bool,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            depth: PreloadDepth::default(),
            capacity: DEFAULT_PRELOAD_CAPACITY,
            enabled: true,
        }
    }
}

impl PreloadConfig {
    /// Creates a configuration with the capacity clamped to its valid range.
    #[must_use]
    pub fn new(depth: usize, capacity: usize) -> Self {
        Self {
            depth: PreloadDepth::new(depth),
            capacity: capacity.clamp(MIN_PRELOAD_CAPACITY, MAX_PRELOAD_CAPACITY),
            enabled: true,
        }
    }

    /// Creates a disabled configuration.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

impl From<&PreloadSection> for PreloadConfig {
    fn from(section: &PreloadSection) -> Self {
        Self {
            enabled: section.enabled,
            ..Self::new(section.depth, section.capacity)
        }
    }
}

/// Statistics about preload cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloadStats {
    /// Number of URLs currently warm.
    pub warm_count: usize,

    /// Number of preload requests not yet completed.
    pub in_flight: usize,

    /// Displayed photos that were already warm.
    pub hits: u64,

    /// Displayed photos that were not warm.
    pub misses: u64,

    /// URLs forgotten due to the capacity limit.
    pub evictions: u64,

    /// URLs newly marked warm.
    pub insertions: u64,
}

impl PreloadStats {
    /// Returns the hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Indices within `depth` of `index`, nearest first, forward before backward.
#[must_use]
pub fn neighbour_indices(index: usize, len: usize, depth: PreloadDepth) -> Vec<usize> {
    let mut indices = Vec::with_capacity(depth.value() * 2);
    for distance in 1..=depth.value() {
        if let Some(forward) = index.checked_add(distance).filter(|&i| i < len) {
            indices.push(forward);
        }
        if let Some(backward) = index.checked_sub(distance) {
            indices.push(backward);
        }
    }
    indices
}

/// Warm set of image URLs with LRU eviction.
#[derive(Debug)]
pub struct PreloadCache {
    warm: LruCache<String, ()>,
    in_flight: LruCache<String, ()>,
    config: PreloadConfig,
    stats: PreloadStats,
}

impl Default for PreloadCache {
    fn default() -> Self {
        Self::new(PreloadConfig::default())
    }
}

impl PreloadCache {
    #[must_use]
    pub fn new(config: PreloadConfig) -> Self {
        let capacity = NonZeroUsize::new(config.capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            warm: LruCache::new(capacity),
            in_flight: LruCache::new(capacity),
            config,
            stats: PreloadStats::default(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    #[must_use]
    pub fn depth(&self) -> PreloadDepth {
        self.config.depth
    }

    /// Marks `url` warm. Returns true only if it was not warm already.
    pub fn insert(&mut self, url: &str) -> bool {
        self.in_flight.pop(url);
        if self.warm.get(url).is_some() {
            self.refresh_counts();
            return false;
        }
        if self.warm.push(url.to_string(), ()).is_some() {
            self.stats.evictions += 1;
        }
        self.stats.insertions += 1;
        self.refresh_counts();
        true
    }

    /// Checks whether `url` is warm without touching LRU order or stats.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.warm.contains(url)
    }

    #[must_use]
    pub fn is_in_flight(&self, url: &str) -> bool {
        self.in_flight.contains(url)
    }

    /// Records a display of `url`: counts a hit or a miss and promotes it.
    pub fn lookup(&mut self, url: &str) -> bool {
        if self.warm.get(url).is_some() {
            self.stats.hits += 1;
            true
        } else {
            self.stats.misses += 1;
            false
        }
    }

    /// Filters candidate URLs down to the ones worth requesting and marks
    /// them in flight. Order is preserved; duplicates are dropped.
    pub fn plan<'a>(&mut self, candidates: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        if !self.config.enabled {
            return Vec::new();
        }
        let mut planned = Vec::new();
        for url in candidates {
            if self.warm.contains(url) || self.in_flight.contains(url) {
                continue;
            }
            if let Some((dropped, ())) = self.in_flight.push(url.to_string(), ()) {
                log::debug!("forgetting unanswered preload of {dropped}");
            }
            planned.push(url.to_string());
        }
        self.refresh_counts();
        planned
    }

    /// A preload finished: the URL is now warm.
    pub fn complete(&mut self, url: &str) -> bool {
        self.insert(url)
    }

    /// A preload failed: forget it so a later plan may retry.
    pub fn fail(&mut self, url: &str) {
        self.in_flight.pop(url);
        self.refresh_counts();
    }

    /// Returns the current cache statistics.
    #[must_use]
    pub fn stats(&self) -> PreloadStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.warm.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warm.is_empty()
    }

    fn refresh_counts(&mut self) {
        self.stats.warm_count = self.warm.len();
        self.stats.in_flight = self.in_flight.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn neighbours_are_nearest_first() {
        assert_eq!(neighbour_indices(5, 10, PreloadDepth::new(2)), vec![6, 4, 7, 3]);
        assert_eq!(neighbour_indices(0, 3, PreloadDepth::new(2)), vec![1, 2]);
        assert_eq!(neighbour_indices(2, 3, PreloadDepth::new(2)), vec![1, 0]);
        assert!(neighbour_indices(0, 1, PreloadDepth::new(2)).is_empty());
        assert!(neighbour_indices(4, 10, PreloadDepth::new(0)).is_empty());
    }

    #[test]
    fn insert_is_idempotent() {
        let mut cache = PreloadCache::default();
        assert!(cache.insert("u1"));
        assert!(!cache.insert("u1"));
        assert!(!cache.insert("u1"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().insertions, 1);
    }

    #[test]
    fn plan_skips_warm_and_in_flight() {
        let mut cache = PreloadCache::default();
        cache.insert("warm");
        let first = cache.plan(["warm", "a", "b", "a"]);
        assert_eq!(first, vec!["a".to_string(), "b".to_string()]);
        assert!(cache.is_in_flight("a"));

        let second = cache.plan(["a", "b", "c"]);
        assert_eq!(second, vec!["c".to_string()]);
        assert_eq!(cache.stats().in_flight, 3);
    }

    #[test]
    fn failed_preload_can_be_retried() {
        let mut cache = PreloadCache::default();
        cache.plan(["a"]);
        cache.fail("a");
        assert!(!cache.is_in_flight("a"));
        assert_eq!(cache.plan(["a"]), vec!["a".to_string()]);
    }

    #[test]
    fn complete_moves_from_in_flight_to_warm() {
        let mut cache = PreloadCache::default();
        cache.plan(["a"]);
        assert!(cache.complete("a"));
        assert!(cache.contains("a"));
        assert!(!cache.is_in_flight("a"));
        assert!(cache.plan(["a"]).is_empty());
    }

    #[test]
    fn capacity_evicts_least_recent() {
        let mut cache = PreloadCache::new(PreloadConfig::new(2, 4));
        for url in ["a", "b", "c", "d"] {
            cache.insert(url);
        }
        // Touch "a" so "b" becomes least recent.
        assert!(cache.lookup("a"));
        cache.insert("e");
        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn unanswered_preloads_are_bounded() {
        let mut cache = PreloadCache::new(PreloadConfig::new(2, MIN_PRELOAD_CAPACITY));
        let urls: Vec<String> = (0..10).map(|i| format!("u{i}")).collect();
        let planned = cache.plan(urls.iter().map(String::as_str));
        assert_eq!(planned.len(), 10);
        assert_eq!(cache.stats().in_flight, MIN_PRELOAD_CAPACITY);
        assert!(!cache.is_in_flight("u0"));
        assert!(cache.is_in_flight("u9"));
    }

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(PreloadConfig::new(2, 0).capacity, MIN_PRELOAD_CAPACITY);
        assert_eq!(PreloadConfig::new(2, usize::MAX).capacity, MAX_PRELOAD_CAPACITY);
    }

    #[test]
    fn disabled_cache_plans_nothing() {
        let mut cache = PreloadCache::new(PreloadConfig::disabled());
        assert!(cache.plan(["a", "b"]).is_empty());
    }

    #[test]
    fn hit_rate_counts_lookups() {
        let mut cache = PreloadCache::default();
        cache.insert("a");
        cache.lookup("a");
        cache.lookup("b");
        assert_abs_diff_eq!(cache.stats().hit_rate(), 50.0);
    }
}
