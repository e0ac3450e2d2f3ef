//! Screenshot encoding and file naming.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::platform::{CapturedImage, PlatformError};

/// Screenshot errors.
#[derive(Debug, Error)]
pub enum ScreenshotError {
    #[error("Capture failed: {0}")]
    Platform(#[from] PlatformError),
    #[error("Image is {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    InvalidImage {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("PNG encoding failed: {0}")]
    Encoding(#[from] png::EncodingError),
    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for screenshot operations.
pub type ScreenshotResult<T> = Result<T, ScreenshotError>;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Default file name (without extension) for a screenshot taken at `time`.
pub fn default_file_name(time: NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Default file name for a screenshot taken now, in local time.
pub fn default_file_name_now() -> String {
    default_file_name(chrono::Local::now().naive_local())
}

/// Append `.png` unless the path already ends with it (any case).
pub fn with_png_extension(path: PathBuf) -> PathBuf {
    let has_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if has_png {
        return path;
    }
    let mut name: OsString = path.into_os_string();
    name.push(".png");
    PathBuf::from(name)
}

/// Encode an RGBA capture as PNG.
pub fn encode_png(image: &CapturedImage) -> ScreenshotResult<Vec<u8>> {
    let expected = image.width as usize * image.height as usize * 4;
    if image.rgba.len() != expected {
        return Err(ScreenshotError::InvalidImage {
            width: image.width,
            height: image.height,
            expected,
            actual: image.rgba.len(),
        });
    }

    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, image.width, image.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image.rgba)?;
        writer.finish()?;
    }
    Ok(png_data)
}

/// Encode `image` and write it to `path`.
pub fn write_png(path: &Path, image: &CapturedImage) -> ScreenshotResult<()> {
    let data = encode_png(image)?;
    std::fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn checker(width: u32, height: u32) -> CapturedImage {
        let mut rgba = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                rgba.extend_from_slice(&[v, v, v, 255]);
            }
        }
        CapturedImage::new(width, height, rgba)
    }

    #[test]
    fn test_default_file_name() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 2)
            .unwrap();
        assert_eq!(default_file_name(time), "2024-03-07_09-05-02");
    }

    #[test]
    fn test_with_png_extension() {
        assert_eq!(with_png_extension(PathBuf::from("/tmp/shot")), PathBuf::from("/tmp/shot.png"));
        assert_eq!(with_png_extension(PathBuf::from("/tmp/shot.PNG")), PathBuf::from("/tmp/shot.PNG"));
        assert_eq!(with_png_extension(PathBuf::from("/tmp/shot.v2")), PathBuf::from("/tmp/shot.v2.png"));
    }

    #[test]
    fn test_encode_png_header() {
        let data = encode_png(&checker(4, 3)).unwrap();
        assert_eq!(&data[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

        let decoder = png::Decoder::new(std::io::Cursor::new(data));
        let reader = decoder.read_info().unwrap();
        assert_eq!((reader.info().width, reader.info().height), (4, 3));
    }

    #[test]
    fn test_encode_png_rejects_short_buffer() {
        let image = CapturedImage::new(4, 4, vec![0; 10]);
        let err = encode_png(&image).unwrap_err();
        assert!(matches!(err, ScreenshotError::InvalidImage { expected: 64, actual: 10, .. }));
    }
}
