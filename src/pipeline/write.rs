//! PNG persistence: one file per page, named by 1-based page number.
//!
//! PNG is chosen because it is lossless — rendered text stays crisp instead
//! of growing compression artefacts around the glyph edges. Filenames carry
//! no zero-padding (`1.png`, `2.png`, … `10.png`), so consumers that sort
//! them must sort numerically, not lexically.

use crate::error::Pdf2PngError;
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filename for a 1-based page number: `1.png`, `2.png`, …
pub fn page_filename(page_num: usize) -> String {
    format!("{page_num}.png")
}

/// Write one rendered page into `output_dir`, returning the file path.
pub fn write_page(
    image: &DynamicImage,
    output_dir: &Path,
    page_num: usize,
) -> Result<PathBuf, Pdf2PngError> {
    let path = output_dir.join(page_filename(page_num));

    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| Pdf2PngError::PageWriteFailed {
            page: page_num,
            path: path.clone(),
            source,
        })?;

    debug!("Saved page {} → {}", page_num, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid_page(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba([250, 250, 250, 255])))
    }

    #[test]
    fn filenames_are_one_based_without_padding() {
        assert_eq!(page_filename(1), "1.png");
        assert_eq!(page_filename(10), "10.png");
        assert_eq!(page_filename(123), "123.png");
    }

    #[test]
    fn writes_a_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_page(&solid_page(12, 17), dir.path(), 1).unwrap();

        assert_eq!(path, dir.path().join("1.png"));
        let reloaded = image::open(&path).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (12, 17));
    }

    #[test]
    fn sequential_pages_land_as_sequential_files() {
        let dir = tempfile::tempdir().unwrap();
        for page in 1..=3 {
            write_page(&solid_page(4, 4), dir.path(), page).unwrap();
        }

        for page in 1..=3 {
            assert!(dir.path().join(format!("{page}.png")).exists());
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn write_into_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = write_page(&solid_page(4, 4), &missing, 1).unwrap_err();
        assert!(matches!(err, Pdf2PngError::PageWriteFailed { page: 1, .. }));
    }
}
