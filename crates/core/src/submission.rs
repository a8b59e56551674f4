//! Validation of user submissions before any write happens.
//!
//! A submission is turned into a [`VideoDraft`] only when every field is
//! acceptable. Errors are always `CoreError::Validation` and are reported in
//! the order a form is filled in: title, link, location.

use serde::Serialize;

use crate::error::CoreError;
use crate::geo::Coordinates;
use crate::slug;
use crate::youtube;

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// Maximum comment length in characters.
pub const MAX_COMMENT_LEN: usize = 2000;

pub const SOURCE_YOUTUBE: &str = "youtube";
pub const SOURCE_UPLOAD: &str = "upload";

/// Where the clip itself is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    Youtube,
    /// Legacy direct upload to our own media storage.
    Upload,
}

impl VideoSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Youtube => SOURCE_YOUTUBE,
            Self::Upload => SOURCE_UPLOAD,
        }
    }
}

/// A fully validated video ready to be inserted as `pending`.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDraft {
    pub title: String,
    pub description: Option<String>,
    /// Base slug; the repository appends a suffix on collision.
    pub slug: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub source: VideoSource,
    pub coordinates: Coordinates,
}

/// Trim and bound a title.
pub fn validate_title(title: &str) -> Result<String, CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::Validation("Title is required".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(title.to_string())
}

/// Trim and bound an optional description. Blank becomes `None`.
pub fn validate_description(description: Option<&str>) -> Result<Option<String>, CoreError> {
    let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) else {
        return Ok(None);
    };
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Description must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(Some(description.to_string()))
}

/// Trim and bound comment content.
pub fn validate_comment(content: &str) -> Result<String, CoreError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(CoreError::Validation("Comment cannot be empty".into()));
    }
    if content.chars().count() > MAX_COMMENT_LEN {
        return Err(CoreError::Validation(format!(
            "Comment must be at most {MAX_COMMENT_LEN} characters"
        )));
    }
    Ok(content.to_string())
}

/// Validate a YouTube-link submission.
pub fn youtube_draft(
    title: &str,
    description: Option<&str>,
    youtube_url: &str,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<VideoDraft, CoreError> {
    let title = validate_title(title)?;
    let description = validate_description(description)?;
    let video = youtube::normalize(youtube_url)?;
    let coordinates = Coordinates::from_selection(latitude, longitude)?;

    Ok(VideoDraft {
        slug: slug::base_slug(&title),
        title,
        description,
        video_url: video.embed_url,
        thumbnail_url: Some(video.thumbnail_url),
        source: VideoSource::Youtube,
        coordinates,
    })
}

/// Validate the metadata of a legacy direct upload.
///
/// `video_url` is the public URL the stored file is served from.
pub fn upload_draft(
    title: &str,
    description: Option<&str>,
    video_url: String,
    coordinates: Coordinates,
) -> Result<VideoDraft, CoreError> {
    let title = validate_title(title)?;
    let description = validate_description(description)?;

    Ok(VideoDraft {
        slug: slug::base_slug(&title),
        title,
        description,
        video_url,
        thumbnail_url: None,
        source: VideoSource::Upload,
        coordinates,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    #[test]
    fn youtube_draft_happy_path() {
        let draft = youtube_draft(
            "  Close call on the S8 ",
            Some("  Truck merges without looking  "),
            URL,
            Some(52.1),
            Some(20.9),
        )
        .unwrap();

        assert_eq!(draft.title, "Close call on the S8");
        assert_eq!(draft.description.as_deref(), Some("Truck merges without looking"));
        assert_eq!(draft.slug, "close-call-on-the-s8");
        assert_eq!(draft.video_url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(
            draft.thumbnail_url.as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
        assert_eq!(draft.source, VideoSource::Youtube);
        assert_eq!(draft.coordinates, Coordinates::new(52.1, 20.9).unwrap());
    }

    #[test]
    fn missing_title_reported_first() {
        assert_matches!(
            youtube_draft("   ", None, "garbage", None, None),
            Err(CoreError::Validation(msg)) if msg == "Title is required"
        );
    }

    #[test]
    fn invalid_url_reported_before_location() {
        assert_matches!(
            youtube_draft("Title", None, "not a url", None, None),
            Err(CoreError::Validation(msg)) if msg.contains("YouTube")
        );
    }

    #[test]
    fn missing_location_rejected() {
        assert_matches!(
            youtube_draft("Title", None, URL, Some(1.0), None),
            Err(CoreError::Validation(msg)) if msg.contains("location")
        );
    }

    #[test]
    fn blank_description_becomes_none() {
        assert_eq!(validate_description(Some("   ")).unwrap(), None);
        assert_eq!(validate_description(None).unwrap(), None);
    }

    #[test]
    fn overlong_fields_rejected() {
        let long_title = "x".repeat(MAX_TITLE_LEN + 1);
        assert_matches!(validate_title(&long_title), Err(CoreError::Validation(_)));

        let long_comment = "y".repeat(MAX_COMMENT_LEN + 1);
        assert_matches!(validate_comment(&long_comment), Err(CoreError::Validation(_)));
    }

    #[test]
    fn punctuation_title_gets_fallback_slug() {
        let draft = youtube_draft("?!?", None, URL, Some(0.0), Some(0.0)).unwrap();
        assert_eq!(draft.slug, slug::FALLBACK_SLUG);
    }

    #[test]
    fn upload_draft_has_no_thumbnail() {
        let coords = Coordinates::new(10.0, 10.0).unwrap();
        let draft = upload_draft(
            "Hail storm",
            None,
            "http://localhost:3000/media/a.mp4".into(),
            coords,
        )
        .unwrap();
        assert_eq!(draft.source, VideoSource::Upload);
        assert!(draft.thumbnail_url.is_none());
        assert_eq!(draft.slug, "hail-storm");
    }

    #[test]
    fn comment_is_trimmed() {
        assert_eq!(validate_comment("  nice catch  ").unwrap(), "nice catch");
        assert_matches!(validate_comment(" \n "), Err(CoreError::Validation(_)));
    }
}
