//! Human-readable URL slugs for videos.
//!
//! Slugs are derived from the video title: lowercase ASCII letters and digits
//! are kept, whitespace and hyphens become separators, everything else is
//! dropped. Runs of separators collapse into one hyphen and hyphens never
//! lead or trail.

/// Slug used when a title contains nothing slug-worthy.
pub const FALLBACK_SLUG: &str = "video";

/// Generate a slug from a title.
///
/// Pure and idempotent. Degenerate input (empty, all punctuation) yields an
/// empty string.
///
/// # Examples
///
/// ```
/// use roadclips_core::slug::generate_slug;
///
/// assert_eq!(generate_slug("My Dashcam Clip!"), "my-dashcam-clip");
/// assert_eq!(generate_slug("  --A4 / exit 12--  "), "a4-exit-12");
/// assert_eq!(generate_slug("!!!"), "");
/// ```
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
    }

    slug
}

/// Slug for a title as it will be persisted: never empty.
pub fn base_slug(title: &str) -> String {
    let slug = generate_slug(title);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// The `n`-th collision candidate for a base slug.
///
/// Attempt 1 is the base itself; later attempts append `-n`.
pub fn slug_with_suffix(base: &str, n: u32) -> String {
    if n <= 1 {
        base.to_string()
    } else {
        format!("{base}-{n}")
    }
}
