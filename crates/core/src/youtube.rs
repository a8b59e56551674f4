//! YouTube link normalisation.
//!
//! Submissions carry whatever link the user pasted. Before anything is
//! written we pull out the 11-character video id and derive the canonical
//! embed and thumbnail URLs from it.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::CoreError;

/// Length of every YouTube video id.
pub const VIDEO_ID_LEN: usize = 11;

/// Hosts we accept links from.
const YOUTUBE_HOSTS: &[&str] = &["youtube.com", "youtu.be", "youtube-nocookie.com"];

/// Markers that precede the id in known URL shapes:
/// `watch?v=`, `&v=`, `youtu.be/`, `/embed/`, `/v/`, `/shorts/`.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/embed/|/v/|/shorts/|[?&]v=)([^#&?/]*)").expect("valid regex")
});

/// A normalised YouTube reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YoutubeVideo {
    pub id: String,
    pub embed_url: String,
    pub thumbnail_url: String,
}

/// Extract the video id from a YouTube URL.
///
/// Returns `None` when the input is not a YouTube link or no candidate is
/// exactly 11 characters of `[A-Za-z0-9_-]`.
///
/// # Examples
///
/// ```
/// use roadclips_core::youtube::extract_video_id;
///
/// assert_eq!(
///     extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
///     Some("dQw4w9WgXcQ"),
/// );
/// assert_eq!(extract_video_id("not a url"), None);
/// ```
pub fn extract_video_id(url: &str) -> Option<String> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    if !YOUTUBE_HOSTS.iter().any(|host| lower.contains(host)) {
        return None;
    }

    VIDEO_ID_RE
        .captures_iter(url)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .find(|candidate| is_valid_video_id(candidate))
        .map(str::to_string)
}

/// Whether `id` has the shape of a YouTube video id.
pub fn is_valid_video_id(id: &str) -> bool {
    id.len() == VIDEO_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Canonical embed URL for a video id.
pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}

/// High-quality thumbnail URL for a video id.
pub fn thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")
}

/// Normalise a user-supplied link, or fail with a validation error.
pub fn normalize(url: &str) -> Result<YoutubeVideo, CoreError> {
    let id = extract_video_id(url).ok_or_else(|| {
        CoreError::Validation("Please enter a valid YouTube video URL".into())
    })?;

    Ok(YoutubeVideo {
        embed_url: embed_url(&id),
        thumbnail_url: thumbnail_url(&id),
        id,
    })
}
