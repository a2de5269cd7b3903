mod error;
mod mime;
mod name;
mod traits;

pub mod filesystem;

pub use error::StorageError;
pub use mime::{ALLOWED_IMAGE_TYPES, is_allowed_image_type, resolve_content_type};
pub use name::{generate_stored_name, url_to_stored_name, validate_stored_name};
pub use traits::{BlobStore, BoxReader, StoredBlob};
