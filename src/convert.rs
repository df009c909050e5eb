//! The conversion entry point: validate, render, and write every page.
//!
//! ## Why strictly sequential?
//!
//! Pages are rendered and written one at a time, in order, on the calling
//! thread. Each in-memory raster is dropped as soon as its file is on disk,
//! so peak memory is one page regardless of document length. pdfium keeps
//! thread-local state internally, which rules out naive parallel rendering;
//! for the page counts this tool targets, wall-clock time is dominated by
//! the backend, not by the write loop.

use crate::config::ConvertConfig;
use crate::error::Pdf2PngError;
use crate::output::ConversionSummary;
use crate::pipeline::{input, render, write};
use std::time::Instant;
use tracing::info;

/// Convert every page of the configured PDF into numbered PNG files.
///
/// The output directory is created (with parents) if missing. Existing
/// files are not cleared here — run a [`crate::plan::ClearPlan`] first if
/// stale images from a previous run must not survive.
///
/// # Errors
/// Fails fast on the first problem, in this order:
/// - [`Pdf2PngError::FileNotFound`] / [`Pdf2PngError::PermissionDenied`] /
///   [`Pdf2PngError::NotAPdf`] — the source path is unusable
/// - [`Pdf2PngError::BackendMissing`] — no pdfium library could be bound;
///   nothing has been rendered or written at this point
/// - [`Pdf2PngError::ParseFailed`] — the backend rejected the document
/// - [`Pdf2PngError::RasterisationFailed`] / [`Pdf2PngError::PageWriteFailed`]
///   — a page failed mid-run; files written for earlier pages remain on disk
pub fn convert(config: &ConvertConfig) -> Result<ConversionSummary, Pdf2PngError> {
    let total_start = Instant::now();
    info!("Starting conversion: {}", config.pdf_path.display());

    // ── Step 1: Validate input ───────────────────────────────────────────
    input::validate_source(&config.pdf_path)?;

    // ── Step 2: Bind backend and load document ───────────────────────────
    let pdfium = render::bind_backend()?;
    let document = render::load_document(&pdfium, &config.pdf_path)?;
    let total_pages = document.pages().len() as usize;

    // ── Step 3: Ensure output directory exists ───────────────────────────
    std::fs::create_dir_all(&config.output_dir).map_err(|source| {
        Pdf2PngError::CreateDirFailed {
            path: config.output_dir.clone(),
            source,
        }
    })?;

    if let Some(ref cb) = config.progress {
        cb.on_start(total_pages);
    }

    // ── Step 4: Render and write, page by page ───────────────────────────
    let mut files = Vec::with_capacity(total_pages);
    let mut render_duration_ms = 0u64;

    for index in 0..total_pages {
        let page_num = index + 1;

        let render_start = Instant::now();
        let image = render::render_page(&document, index)?;
        render_duration_ms += render_start.elapsed().as_millis() as u64;

        let path = write::write_page(&image, &config.output_dir, page_num)?;
        info!("Saved page {} as {}", page_num, write::page_filename(page_num));

        if let Some(ref cb) = config.progress {
            cb.on_page_written(page_num, total_pages, &write::page_filename(page_num));
        }

        files.push(path);
    }

    // ── Step 5: Summarise ────────────────────────────────────────────────
    let summary = ConversionSummary {
        pages_written: files.len(),
        output_dir: config.output_dir.clone(),
        files,
        render_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Conversion complete: {} pages in {}ms",
        summary.pages_written, summary.total_duration_ms
    );

    if let Some(ref cb) = config.progress {
        cb.on_complete(summary.pages_written);
    }

    Ok(summary)
}
