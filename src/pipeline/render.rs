//! PDF rasterisation: render pages to `DynamicImage` via pdfium.
//!
//! ## The backend is external
//!
//! pdfium is Chromium's PDF engine — a native shared library, not a Rust
//! dependency. Nothing is linked at build time; [`bind_backend`] loads the
//! library at runtime, either from the system search path or from
//! `PDFIUM_LIB_PATH`. A failed bind is the "backend not installed" case and
//! maps to [`Pdf2PngError::BackendMissing`], whose message carries the
//! install hint.
//!
//! ## DPI to scale factor
//!
//! PDF page geometry is expressed in points (1/72 inch). Rendering at
//! [`RENDER_DPI`] therefore means scaling the page by `dpi / 72` so that one
//! point becomes `dpi / 72` pixels.

use crate::config::RENDER_DPI;
use crate::error::Pdf2PngError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Points per inch in PDF page geometry.
const POINTS_PER_INCH: f32 = 72.0;

/// Bind the pdfium shared library.
///
/// `PDFIUM_LIB_PATH` overrides the system lookup; it may name the library
/// file itself or the directory containing it.
pub fn bind_backend() -> Result<Pdfium, Pdf2PngError> {
    let bindings = match std::env::var_os("PDFIUM_LIB_PATH") {
        Some(lib_path) => {
            let lib_path = PathBuf::from(lib_path);
            let lib_path = if lib_path.is_dir() {
                lib_path.join(Pdfium::pdfium_platform_library_name())
            } else {
                lib_path
            };
            debug!("Binding pdfium from PDFIUM_LIB_PATH: {}", lib_path.display());
            Pdfium::bind_to_library(&lib_path)
        }
        None => Pdfium::bind_to_system_library(),
    }
    .map_err(|e| Pdf2PngError::BackendMissing {
        detail: e.to_string(),
    })?;

    Ok(Pdfium::new(bindings))
}

/// Open the source document through a bound backend.
pub fn load_document<'a>(
    pdfium: &'a Pdfium,
    path: &Path,
) -> Result<PdfDocument<'a>, Pdf2PngError> {
    let document =
        pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Pdf2PngError::ParseFailed {
                path: path.to_path_buf(),
                detail: format!("{:?}", e),
            })?;

    info!("PDF loaded: {} pages", document.pages().len());
    Ok(document)
}

/// Rasterise a single page (0-indexed) at the fixed resolution.
pub fn render_page(
    document: &PdfDocument<'_>,
    index: usize,
) -> Result<DynamicImage, Pdf2PngError> {
    let render_config =
        PdfRenderConfig::new().scale_page_by_factor(RENDER_DPI as f32 / POINTS_PER_INCH);

    let page = document
        .pages()
        .get(index as u16)
        .map_err(|e| Pdf2PngError::RasterisationFailed {
            page: index + 1,
            detail: format!("{:?}", e),
        })?;

    let bitmap =
        page.render_with_config(&render_config)
            .map_err(|e| Pdf2PngError::RasterisationFailed {
                page: index + 1,
                detail: format!("{:?}", e),
            })?;

    let image = bitmap.as_image();
    debug!(
        "Rendered page {} → {}x{} px",
        index + 1,
        image.width(),
        image.height()
    );

    Ok(image)
}
