//! Conversion configuration.
//!
//! The two paths a run operates on come from the caller — nothing in the
//! library hardcodes a filesystem location. The rendering resolution, by
//! contrast, is deliberately a constant: the output of this tool is a set of
//! page images at a known, uniform quality, not a tunable export.

use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// Rendering resolution applied to every page, in dots per inch.
///
/// PDF page geometry is expressed in points (1/72 inch), so this corresponds
/// to a rasterisation scale factor of `200 / 72 ≈ 2.78`. At 200 DPI body
/// text stays crisp on screen while a typical A4 page lands around
/// 1650 × 2350 px.
pub const RENDER_DPI: u32 = 200;

/// Configuration for one conversion run.
///
/// # Example
/// ```rust
/// use pdf2png::ConvertConfig;
///
/// let config = ConvertConfig::new("portfolio.pdf", "flipbook-images");
/// assert_eq!(config.output_dir.to_str(), Some("flipbook-images"));
/// ```
#[derive(Clone)]
pub struct ConvertConfig {
    /// Path to the source PDF. Read-only; never mutated by a run.
    pub pdf_path: PathBuf,

    /// Directory that receives the numbered PNGs. Created (with parents)
    /// if absent.
    pub output_dir: PathBuf,

    /// Optional per-page progress callback.
    pub progress: Option<ProgressCallback>,
}

impl ConvertConfig {
    /// Configuration with the given source PDF and output directory.
    pub fn new(pdf_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            pdf_path: pdf_path.into(),
            output_dir: output_dir.into(),
            progress: None,
        }
    }

    /// Attach a progress callback receiving per-page events.
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }
}

impl fmt::Debug for ConvertConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertConfig")
            .field("pdf_path", &self.pdf_path)
            .field("output_dir", &self.output_dir)
            .field("progress", &self.progress.as_ref().map(|_| "<dyn ConvertProgress>"))
            .finish()
    }
}
