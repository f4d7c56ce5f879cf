//! Downscaling and re-encoding of uploaded images.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use tracing::debug;

use crate::error::{Error, Result};

/// MIME type of every compressed photo.
pub const OUTPUT_MIME: &str = "image/jpeg";

/// How uploads are compressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressOptions {
    /// Longest edge of the output, in pixels.
    pub max_long_side: u32,
    /// Encoder quality, 1-100.
    pub quality: u8,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            max_long_side: 1600,
            quality: 82,
        }
    }
}

/// A compressed image ready to store.
#[derive(Clone, PartialEq, Eq)]
pub struct CompressedImage {
    /// Encoded bytes.
    pub blob: Vec<u8>,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// MIME type of `blob`.
    pub mime: String,
}

impl std::fmt::Debug for CompressedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompressedImage")
            .field("blob_len", &self.blob.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("mime", &self.mime)
            .finish()
    }
}

/// Output dimensions for a `width` x `height` source.
///
/// Sources whose longer edge exceeds `max_long_side` are scaled down to fit,
/// rounding each side to the nearest pixel and never below 1. Smaller sources
/// keep their size.
#[must_use]
pub fn target_size(width: u32, height: u32, max_long_side: u32) -> (u32, u32) {
    let long = width.max(height);
    if long <= max_long_side {
        return (width, height);
    }

    let scale = |side: u32| {
        let scaled = (u64::from(side) * u64::from(max_long_side) + u64::from(long) / 2)
            / u64::from(long);
        u32::try_from(scaled).unwrap_or(max_long_side).max(1)
    };
    (scale(width), scale(height))
}

/// Decode, downscale and re-encode an image on the calling thread.
///
/// # Errors
///
/// Returns [`Error::ImageDecode`] if `bytes` is not a supported image and
/// [`Error::ImageEncode`] if encoding fails.
pub fn compress_blocking(bytes: &[u8], options: CompressOptions) -> Result<CompressedImage> {
    let source = image::load_from_memory(bytes).map_err(Error::ImageDecode)?;
    let (width, height) = target_size(source.width(), source.height(), options.max_long_side);

    let resized = if (width, height) == (source.width(), source.height()) {
        source
    } else {
        source.resize_exact(width, height, FilterType::Triangle)
    };

    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());
    let mut blob = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut blob), options.quality);
    rgb.write_with_encoder(encoder)
        .map_err(Error::ImageEncode)?;

    debug!(
        "Compressed {} bytes to {} bytes at {}x{}",
        bytes.len(),
        blob.len(),
        width,
        height
    );

    Ok(CompressedImage {
        blob,
        width,
        height,
        mime: OUTPUT_MIME.to_string(),
    })
}

/// Decode, downscale and re-encode an image on the blocking pool.
///
/// # Errors
///
/// See [`compress_blocking`].
pub async fn compress(bytes: Vec<u8>, options: CompressOptions) -> Result<CompressedImage> {
    tokio::task::spawn_blocking(move || compress_blocking(&bytes, options))
        .await
        .map_err(|e| Error::internal(format!("image compression task failed: {e}")))?
}

#[cfg(test)]
pub(crate) mod tests {
    use image::{ImageFormat, Rgba, RgbaImage};

    use super::*;

    /// Encode a solid test image as PNG.
    pub(crate) fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 120, 40, 128]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_target_size() {
        assert_eq!(target_size(4000, 3000, 1600), (1600, 1200));
        assert_eq!(target_size(3000, 4000, 1600), (1200, 1600));
        assert_eq!(target_size(800, 600, 1600), (800, 600));
        assert_eq!(target_size(1600, 10, 1600), (1600, 10));
        assert_eq!(target_size(10_000, 1, 1600), (1600, 1));
        assert_eq!(target_size(3, 2, 2), (2, 1));
    }

    #[test]
    fn test_compress_downscales_large_image() {
        let options = CompressOptions {
            max_long_side: 64,
            quality: 82,
        };
        let out = compress_blocking(&png(200, 100), options).unwrap();

        assert_eq!((out.width, out.height), (64, 32));
        assert_eq!(out.mime, "image/jpeg");
        let decoded = image::load_from_memory(&out.blob).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 32));
    }

    #[test]
    fn test_compress_keeps_small_image_size() {
        let out = compress_blocking(&png(40, 30), CompressOptions::default()).unwrap();
        assert_eq!((out.width, out.height), (40, 30));
        assert_eq!(image::guess_format(&out.blob).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_compress_rejects_non_image() {
        let err = compress_blocking(b"definitely not a picture", CompressOptions::default())
            .unwrap_err();
        assert!(err.is_image_failure());
    }

    #[tokio::test]
    async fn test_compress_on_blocking_pool() {
        let out = compress(png(10, 10), CompressOptions::default()).await.unwrap();
        assert_eq!((out.width, out.height), (10, 10));
    }
}
