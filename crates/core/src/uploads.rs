//! Upload policy for collection point photos.
//!
//! Decides which files are accepted and what name they are stored under.
//! Writing the bytes is the caller's job.

use crate::error::CoreError;

/// MIME types accepted for point photos.
pub const ALLOWED_IMAGE_MIME_TYPES: &[&str] = &["image/png", "image/jpg", "image/jpeg"];

/// Maximum accepted photo size (2 MiB).
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Number of random bytes in a stored filename prefix (hex-encoded to twice as many chars).
const PREFIX_BYTES: usize = 6;

/// Fallback used when the client sends no usable original filename.
const DEFAULT_ORIGINAL_NAME: &str = "image";

/// Check the declared content type and size of an uploaded photo.
pub fn validate_image(content_type: Option<&str>, size: usize) -> Result<(), CoreError> {
    let content_type = content_type.unwrap_or("").to_ascii_lowercase();
    if !ALLOWED_IMAGE_MIME_TYPES.contains(&content_type.as_str()) {
        return Err(CoreError::Validation(format!(
            "Unsupported image type '{content_type}'. Must be one of: {ALLOWED_IMAGE_MIME_TYPES:?}"
        )));
    }

    if size == 0 {
        return Err(CoreError::Validation("Image file is empty".to_string()));
    }

    if size > MAX_IMAGE_BYTES {
        return Err(CoreError::Validation(format!(
            "Image is {size} bytes; the limit is {MAX_IMAGE_BYTES} bytes"
        )));
    }

    Ok(())
}

/// Generate the name a photo is stored under: `{12 hex chars}-{original name}`.
///
/// Only the final path component of the client-supplied name is kept, so a
/// name like `../../etc/passwd` cannot escape the uploads directory.
pub fn stored_filename(original: &str) -> String {
    let prefix: [u8; PREFIX_BYTES] = rand::random();
    let prefix: String = prefix.iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}-{}", sanitize_original_name(original))
}

fn sanitize_original_name(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("")
        .trim();

    if base.is_empty() || base == "." || base == ".." {
        return DEFAULT_ORIGINAL_NAME.to_string();
    }

    base.chars()
        .map(|c| if c.is_whitespace() || c.is_control() { '-' } else { c })
        .collect()
}
