//! Rules for the legacy direct-upload flow.
//!
//! New clips are submitted as YouTube links; uploads are kept for older
//! clients. Stored files get a random name so user input never reaches the
//! filesystem path.

use uuid::Uuid;

use crate::error::CoreError;

/// Video container extensions accepted for direct upload.
pub const SUPPORTED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "mkv", "avi"];

/// Default upload size limit (200 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

/// Lowercased extension of an uploaded file name, if it is supported.
pub fn video_extension(original_name: &str) -> Result<String, CoreError> {
    let ext = original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if SUPPORTED_VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported video format '.{ext}'. Supported: {}",
            SUPPORTED_VIDEO_EXTENSIONS
                .iter()
                .map(|e| format!(".{e}"))
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

/// Random storage name for an upload, keeping its extension.
pub fn stored_file_name(original_name: &str) -> Result<String, CoreError> {
    let ext = video_extension(original_name)?;
    Ok(format!("{}.{ext}", Uuid::new_v4()))
}

/// Reject empty or oversized payloads.
pub fn validate_size(len: usize, max_bytes: usize) -> Result<(), CoreError> {
    if len == 0 {
        return Err(CoreError::Validation("Please select a video file".into()));
    }
    if len > max_bytes {
        return Err(CoreError::Validation(format!(
            "Video file exceeds the {max_bytes} byte limit"
        )));
    }
    Ok(())
}

/// Whether a stored file name is one we generated (uuid + known extension).
///
/// Used before deleting files so a crafted URL cannot escape the media root.
pub fn is_stored_file_name(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) => {
            Uuid::parse_str(stem).is_ok() && SUPPORTED_VIDEO_EXTENSIONS.contains(&ext)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(video_extension("Crash.MP4").unwrap(), "mp4");
        assert_eq!(video_extension("clip.final.webm").unwrap(), "webm");
    }

    #[test]
    fn unsupported_or_missing_extension_rejected() {
        assert_matches!(video_extension("notes.txt"), Err(CoreError::Validation(_)));
        assert_matches!(video_extension("noext"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn stored_name_is_uuid_with_extension() {
        let name = stored_file_name("dashcam.MOV").unwrap();
        assert!(name.ends_with(".mov"));
        assert!(is_stored_file_name(&name));
    }

    #[test]
    fn stored_names_are_unique() {
        let a = stored_file_name("a.mp4").unwrap();
        let b = stored_file_name("a.mp4").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn foreign_names_are_not_stored_names() {
        assert!(!is_stored_file_name("../../etc/passwd"));
        assert!(!is_stored_file_name("clip.mp4"));
    }

    #[test]
    fn size_limits() {
        assert!(validate_size(10, 100).is_ok());
        assert_matches!(validate_size(0, 100), Err(CoreError::Validation(_)));
        assert_matches!(validate_size(101, 100), Err(CoreError::Validation(_)));
    }
}
