use chrono::Utc;

use super::error::StorageError;

/// Validates a name that will be used as a single entry in the uploads directory.
///
/// The name is kept verbatim (no trimming). Anything that could resolve outside the
/// directory, or break a URL path segment or response header, is rejected.
pub fn validate_stored_name(name: &str) -> Result<&str, StorageError> {
    if name.trim().is_empty() {
        return Err(StorageError::InvalidFilename("Filename cannot be empty"));
    }

    if name.contains('\0') {
        return Err(StorageError::InvalidFilename(
            "null bytes are not allowed",
        ));
    }

    // CR/LF would also allow header injection when serving the blob back.
    if name.chars().any(|c| c.is_ascii_control()) {
        return Err(StorageError::InvalidFilename(
            "control characters are not allowed",
        ));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(StorageError::InvalidFilename(
            "path separators are not allowed",
        ));
    }

    if name == "." || name == ".." {
        return Err(StorageError::InvalidFilename("'.' and '..' are not allowed"));
    }

    // The name is published verbatim as the last segment of its URL.
    if name.contains(['%', '#', '?']) {
        return Err(StorageError::InvalidFilename(
            "'%', '#' and '?' are not allowed",
        ));
    }

    Ok(name)
}

/// Build the stored name for an upload: `<unix millis>_<original filename>`.
///
/// Two uploads of the same filename within one millisecond collide.
pub fn generate_stored_name(original_filename: &str) -> Result<String, StorageError> {
    let original = validate_stored_name(original_filename)?;
    Ok(format!("{}_{}", Utc::now().timestamp_millis(), original))
}

/// Inverse of the URL mapping: the last `/`-separated segment of `url`.
pub fn url_to_stored_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
