//! Public URLs for stored image references.
//!
//! The database only keeps filenames. Clients need an absolute address, so
//! responses join the filename onto the configured uploads base URL.

/// Join `base_url` and `filename` with exactly one `/` between them.
///
/// # Examples
///
/// ```
/// use ecopoints_core::images::image_url;
///
/// assert_eq!(
///     image_url("http://localhost:3333/uploads/", "ab12-photo.png"),
///     "http://localhost:3333/uploads/ab12-photo.png",
/// );
/// ```
pub fn image_url(base_url: &str, filename: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        filename.trim_start_matches('/')
    )
}
