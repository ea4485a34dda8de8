//! Image asset naming rules.
//!
//! Uploaded images are stored under a freshly generated name; the client's
//! file name only ever contributes its extension. Names arriving on the
//! serving path are cut down to a single path component before use.

/// Image extensions accepted for upload (compared case-insensitively).
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Content type used when an extension has no known mapping.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Return the lowercased extension of `filename` if it is an allowed image type.
///
/// A name without a `.` or with an unknown extension yields `None`, which
/// callers treat as "no image provided".
pub fn image_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

/// Build the on-disk name for an upload: `<uuid>.<ext>`.
///
/// # Examples
///
/// ```
/// use glossary_core::naming::stored_image_name;
///
/// let name = stored_image_name("../../Holiday Photo.JPG").unwrap();
/// assert!(name.ends_with(".jpg"));
/// assert!(!name.contains("Holiday"));
/// assert!(stored_image_name("evil.exe").is_none());
/// ```
pub fn stored_image_name(original_filename: &str) -> Option<String> {
    let ext = image_extension(original_filename)?;
    Some(format!("{}.{ext}", uuid::Uuid::new_v4().simple()))
}

/// Reduce a requested asset name to its final path component.
///
/// Rejects empty names, `.`/`..`, and anything carrying a backslash or NUL
/// so the result can be joined onto the image directory without escaping it.
pub fn served_file_name(requested: &str) -> Option<&str> {
    if requested.contains(['\\', '\0']) {
        return None;
    }
    let leaf = requested.rsplit('/').next()?;
    match leaf {
        "" | "." | ".." => None,
        leaf => Some(leaf),
    }
}

/// MIME type for a stored image, derived from its extension.
pub fn image_content_type(filename: &str) -> &'static str {
    match image_extension(filename).as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(image_extension("photo.PNG").as_deref(), Some("png"));
        assert_eq!(image_extension("a.b.JpEg").as_deref(), Some("jpeg"));
    }

    #[test]
    fn unknown_or_missing_extension_is_rejected() {
        assert!(image_extension("evil.exe").is_none());
        assert!(image_extension("png").is_none());
        assert!(image_extension("archive.png.zip").is_none());
        assert!(image_extension("").is_none());
    }

    #[test]
    fn stored_name_ignores_client_base_name() {
        let name = stored_image_name("../../etc/passwd.gif").unwrap();
        let (stem, ext) = name.rsplit_once('.').unwrap();
        assert_eq!(ext, "gif");
        assert_eq!(stem.len(), 32);
        assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn stored_names_do_not_collide() {
        let a = stored_image_name("x.png").unwrap();
        let b = stored_image_name("x.png").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn served_name_keeps_last_component() {
        assert_eq!(served_file_name("abc.png"), Some("abc.png"));
        assert_eq!(served_file_name("../../items.json"), Some("items.json"));
        assert_eq!(served_file_name("/etc/passwd"), Some("passwd"));
    }

    #[test]
    fn served_name_rejects_traversal_only_values() {
        assert_eq!(served_file_name(""), None);
        assert_eq!(served_file_name(".."), None);
        assert_eq!(served_file_name("foo/.."), None);
        assert_eq!(served_file_name("foo/"), None);
        assert_eq!(served_file_name("..\\secret.png"), None);
        assert_eq!(served_file_name("a\0.png"), None);
    }

    #[test]
    fn content_type_by_extension() {
        assert_eq!(image_content_type("a.JPG"), "image/jpeg");
        assert_eq!(image_content_type("a.webp"), "image/webp");
        assert_eq!(image_content_type("a.txt"), "application/octet-stream");
    }
}
