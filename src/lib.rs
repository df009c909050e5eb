//! # pdf2png
//!
//! Rasterise every page of a PDF document into numbered PNG images.
//!
//! ## What it does
//!
//! Given a source PDF and an output directory, pdf2png renders each page at
//! a fixed 200 DPI and writes it as `1.png`, `2.png`, … `N.png` — the layout
//! expected by image-sequence consumers such as flipbook viewers and slide
//! galleries. Clearing stale images from a previous run is modelled as an
//! explicit two-phase [`ClearPlan`] so the destructive step stays separate
//! from (and inspectable before) the conversion itself.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Scan    compute which stale PNGs a run would delete (pure)
//!  ├─ 2. Apply   delete them / create the output directory
//!  ├─ 3. Input   validate the source path and PDF magic bytes
//!  ├─ 4. Render  rasterise each page via pdfium at 200 DPI
//!  └─ 5. Write   persist pages as 1.png … N.png, in order
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2png::{convert, ClearPlan, ConvertConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Clear output from an earlier run, then convert.
//!     let plan = ClearPlan::scan("flipbook-images")?;
//!     plan.apply()?;
//!
//!     let config = ConvertConfig::new("portfolio.pdf", "flipbook-images");
//!     let summary = convert(&config)?;
//!     println!(
//!         "wrote {} pages to {}",
//!         summary.pages_written,
//!         summary.output_dir.display()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## The rendering backend
//!
//! Rendering goes through [pdfium](https://pdfium.googlesource.com/pdfium/),
//! Chromium's PDF engine, loaded as a shared library at runtime. If no
//! library is found on the system search path, set `PDFIUM_LIB_PATH` to a
//! copy downloaded from
//! [bblanchon/pdfium-binaries](https://github.com/bblanchon/pdfium-binaries).
//! A missing backend surfaces as [`Pdf2PngError::BackendMissing`] before
//! anything is rendered or written.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2png` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2png = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod plan;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConvertConfig, RENDER_DPI};
pub use convert::convert;
pub use error::Pdf2PngError;
pub use output::ConversionSummary;
pub use plan::ClearPlan;
pub use progress::{ConvertProgress, ProgressCallback};
