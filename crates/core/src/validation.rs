//! Field-level validation rules for events and photo uploads.
//!
//! Rules return [`CoreError::Validation`] with a user-facing message; the
//! API layer surfaces them as 400 responses.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Event field bounds
// ---------------------------------------------------------------------------

pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MIN_CHARS: usize = 20;
pub const CAPACITY_MIN: i32 = 1;
pub const CAPACITY_MAX: i32 = 1000;

// ---------------------------------------------------------------------------
// Photo upload bounds
// ---------------------------------------------------------------------------

/// Upload size ceiling in bytes (5 MB).
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Minimum width and height in pixels.
pub const MIN_PHOTO_DIMENSION: u32 = 100;

/// Maximum width and height in pixels.
pub const MAX_PHOTO_DIMENSION: u32 = 4000;

// ---------------------------------------------------------------------------
// Event fields
// ---------------------------------------------------------------------------

/// Validate the static event fields common to create and update.
pub fn validate_event_fields(
    title: &str,
    description: &str,
    capacity: i32,
) -> Result<(), CoreError> {
    let title_chars = title.trim().chars().count();
    if title_chars < TITLE_MIN_CHARS {
        return Err(CoreError::Validation(format!(
            "Title must be at least {TITLE_MIN_CHARS} characters long"
        )));
    }
    if title_chars > TITLE_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "Title must be at most {TITLE_MAX_CHARS} characters long"
        )));
    }

    if description.trim().chars().count() < DESCRIPTION_MIN_CHARS {
        return Err(CoreError::Validation(format!(
            "Description must be at least {DESCRIPTION_MIN_CHARS} characters long"
        )));
    }

    if !(CAPACITY_MIN..=CAPACITY_MAX).contains(&capacity) {
        return Err(CoreError::Validation(format!(
            "Capacity must be between {CAPACITY_MIN} and {CAPACITY_MAX}"
        )));
    }

    Ok(())
}

/// A new or moved start time must lie strictly in the future.
///
/// Applied on create and whenever an update changes the start time; an
/// unchanged start time of a past event stays valid.
pub fn validate_start_time(start_time: Timestamp, now: Timestamp) -> Result<(), CoreError> {
    if start_time <= now {
        return Err(CoreError::Validation(
            "Event date must be in the future".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Photo uploads
// ---------------------------------------------------------------------------

/// Header facts about an accepted upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoInfo {
    pub width: u32,
    pub height: u32,
    /// File extension for the stored copy (`"png"`, `"jpg"`, `"webp"`).
    pub extension: &'static str,
}

/// Validate an uploaded photo and return its header facts.
///
/// Checks the byte-size ceiling first, then reads only the image header to
/// establish format and dimensions. The full pixel data is never decoded.
pub fn validate_photo(bytes: &[u8]) -> Result<PhotoInfo, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::Validation("No image data received".into()));
    }
    if bytes.len() > MAX_PHOTO_BYTES {
        return Err(CoreError::Validation(format!(
            "Image exceeds the {} MB size limit",
            MAX_PHOTO_BYTES / (1024 * 1024)
        )));
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CoreError::Internal(format!("Image header read failed: {e}")))?;

    let extension = match reader.format() {
        Some(ImageFormat::Png) => "png",
        Some(ImageFormat::Jpeg) => "jpg",
        Some(ImageFormat::WebP) => "webp",
        _ => {
            return Err(CoreError::Validation(
                "Unsupported image format. Upload a PNG, JPEG, or WebP image".into(),
            ))
        }
    };

    let (width, height) = reader.into_dimensions().map_err(|_| {
        CoreError::Validation("Could not read image dimensions. The file may be corrupt".into())
    })?;

    if width < MIN_PHOTO_DIMENSION || height < MIN_PHOTO_DIMENSION {
        return Err(CoreError::Validation(format!(
            "Image must be at least {MIN_PHOTO_DIMENSION}x{MIN_PHOTO_DIMENSION} pixels"
        )));
    }
    if width > MAX_PHOTO_DIMENSION || height > MAX_PHOTO_DIMENSION {
        return Err(CoreError::Validation(format!(
            "Image must be at most {MAX_PHOTO_DIMENSION}x{MAX_PHOTO_DIMENSION} pixels"
        )));
    }

    Ok(PhotoInfo {
        width,
        height,
        extension,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn ok_fields() -> (&'static str, &'static str, i32) {
        (
            "Beach Cleanup Day",
            "Join us for a morning of cleaning up the shoreline together.",
            25,
        )
    }

    #[test]
    fn accepts_valid_event_fields() {
        let (title, desc, cap) = ok_fields();
        assert!(validate_event_fields(title, desc, cap).is_ok());
    }

    #[test]
    fn rejects_short_title() {
        let (_, desc, cap) = ok_fields();
        let result = validate_event_fields("Eco", desc, cap);
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("Title"));
    }

    #[test]
    fn rejects_short_description() {
        let (title, _, cap) = ok_fields();
        let result = validate_event_fields(title, "Too short", cap);
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("Description"));
    }

    #[test]
    fn rejects_capacity_out_of_bounds() {
        let (title, desc, _) = ok_fields();
        for capacity in [0, -5, 1001] {
            let result = validate_event_fields(title, desc, capacity);
            assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("Capacity"));
        }
    }

    #[test]
    fn rejects_past_or_present_start_time() {
        for start in [now(), now() - Duration::hours(1)] {
            let result = validate_start_time(start, now());
            assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("future"));
        }
        assert!(validate_start_time(now() + Duration::minutes(1), now()).is_ok());
    }

    /// A complete, valid 1x1 grayscale PNG -- below the dimension floor.
    const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
        0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1
        0x08, 0x00, 0x00, 0x00, 0x00, 0x3A, 0x7E, 0x9B, 0x55,
        0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, // IDAT
        0x78, 0xDA, 0x63, 0x68, 0x00, 0x00, 0x00, 0x82, 0x00, 0x81,
        0xDA, 0x45, 0x08, 0x3B,
        0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, // IEND
        0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn rejects_empty_and_oversized_uploads() {
        assert_matches!(validate_photo(&[]), Err(CoreError::Validation(_)));

        let huge = vec![0u8; MAX_PHOTO_BYTES + 1];
        assert_matches!(
            validate_photo(&huge),
            Err(CoreError::Validation(msg)) if msg.contains("size limit")
        );
    }

    #[test]
    fn rejects_non_image_bytes() {
        let result = validate_photo(b"definitely not an image");
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_undersized_dimensions() {
        let result = validate_photo(TINY_PNG);
        assert_matches!(
            result,
            Err(CoreError::Validation(msg)) if msg.contains("at least")
        );
    }
}
