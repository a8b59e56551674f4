//! In-process cache for public read queries.
//!
//! Entries are keyed by [`CacheKey`] and hold the serialized response
//! payload. Every mutation invalidates exactly the keys whose payload it can
//! change, so a vote never evicts comment lists and a comment never evicts
//! vote counts. Per-user data (such as the caller's own vote) is never cached.

use std::collections::HashMap;
use std::future::Future;

use roadclips_core::types::DbId;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};

/// Identity of a cached query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Default first page of approved videos, newest first.
    ApprovedVideos,
    /// Approved videos ranked by score.
    TopVideos,
    /// Approved video detail with vote counts.
    VideoDetail(DbId),
    /// Vote counts for a video.
    Votes(DbId),
    /// Comments on a video.
    Comments(DbId),
}

impl CacheKey {
    /// Keys affected by a vote being cast or removed.
    pub fn on_vote(video_id: DbId) -> [CacheKey; 3] {
        [
            CacheKey::Votes(video_id),
            CacheKey::TopVideos,
            CacheKey::VideoDetail(video_id),
        ]
    }

    /// Keys affected by a new comment.
    pub fn on_comment(video_id: DbId) -> [CacheKey; 1] {
        [CacheKey::Comments(video_id)]
    }

    /// Keys affected when a video itself changes: moderation, edit,
    /// deletion or a location change.
    pub fn on_video_change(video_id: DbId) -> [CacheKey; 5] {
        [
            CacheKey::ApprovedVideos,
            CacheKey::TopVideos,
            CacheKey::VideoDetail(video_id),
            CacheKey::Votes(video_id),
            CacheKey::Comments(video_id),
        ]
    }
}

/// Shared query cache behind a tokio `RwLock`.
#[derive(Default)]
pub struct QueryCache {
    inner: RwLock<CacheState>,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<CacheKey, Value>,
    /// Bumped on every invalidation of a key. A load only stores its result
    /// if the generation it started under is still current.
    generations: HashMap<CacheKey, u64>,
}

impl CacheState {
    fn generation(&self, key: &CacheKey) -> u64 {
        self.generations.get(key).copied().unwrap_or(0)
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &CacheKey) -> Option<Value> {
        self.inner.read().await.entries.get(key).cloned()
    }

    pub async fn insert(&self, key: CacheKey, value: Value) {
        self.inner.write().await.entries.insert(key, value);
    }

    /// Drop the given keys and retire any load still in flight for them.
    /// Missing keys are ignored.
    pub async fn invalidate(&self, keys: &[CacheKey]) {
        let mut state = self.inner.write().await;
        for key in keys {
            state.entries.remove(key);
            *state.generations.entry(*key).or_insert(0) += 1;
        }
        tracing::debug!(?keys, "Cache keys invalidated");
    }

    pub async fn contains(&self, key: &CacheKey) -> bool {
        self.inner.read().await.entries.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Return the cached payload for `key`, or run `load`, cache its
    /// serialized result and return it.
    ///
    /// The result is returned either way, but it is only stored if `key` was
    /// not invalidated while `load` ran.
    pub async fn get_or_load<T, F, Fut>(&self, key: CacheKey, load: F) -> AppResult<Value>
    where
        T: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let started_at = {
            let state = self.inner.read().await;
            if let Some(hit) = state.entries.get(&key) {
                return Ok(hit.clone());
            }
            state.generation(&key)
        };

        let fresh = load().await?;
        let value = serde_json::to_value(&fresh)
            .map_err(|e| AppError::InternalError(format!("Cache serialization error: {e}")))?;

        let mut state = self.inner.write().await;
        if state.generation(&key) == started_at {
            state.entries.insert(key, value.clone());
        } else {
            tracing::debug!(?key, "Discarding load superseded by invalidation");
        }
        Ok(value)
    }
}
