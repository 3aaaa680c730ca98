//! Pure image work: format detection, the fixed-size resize, and the
//! content-type mapping. No I/O here, which keeps it trivially testable.

use crate::config::THUMBNAIL_SIZE;
use crate::errors::{ResizeError, ResizeResult};
use image::ImageFormat;
use image::imageops::FilterType;
use std::io::Cursor;

/// Decode `bytes`, stretch to the fixed square thumbnail size, and
/// re-encode in the same format the source was detected as.
///
/// The format comes from content inspection, never from the object key's
/// extension. Aspect ratio is intentionally discarded.
pub fn make_thumbnail(bytes: &[u8]) -> ResizeResult<(Vec<u8>, ImageFormat)> {
    let format = image::guess_format(bytes).map_err(ResizeError::Decode)?;
    let img = image::load_from_memory_with_format(bytes, format).map_err(ResizeError::Decode)?;

    let resized = img.resize_exact(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Triangle);

    let mut out = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut out), format)
        .map_err(ResizeError::Encode)?;
    Ok((out, format))
}

/// Map a detected format to the content type written on the destination
/// object. Anything outside the known set falls back to `image/jpeg`,
/// matching what the function has always uploaded for exotic sources.
pub fn content_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Png => "image/png",
        ImageFormat::Gif => "image/gif",
        _ => "image/jpeg",
    }
}
