/// Content types accepted for upload.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Normalize a declared content type, falling back to a guess from the filename.
///
/// Parameters such as `; charset=...` are dropped and the essence is lowercased.
/// Returns `application/octet-stream` when neither source yields a type.
pub fn resolve_content_type(declared: Option<&str>, filename: &str) -> String {
    let declared = declared
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .filter(|ct| !ct.is_empty());

    match declared {
        Some(ct) => ct,
        None => mime_guess::from_path(filename)
            .first_or_octet_stream()
            .essence_str()
            .to_string(),
    }
}

/// Whether `content_type` (already normalized) is on the allow-list.
pub fn is_allowed_image_type(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}
