//! Pipeline stages for PDF-to-PNG conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch rendering backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ render ──▶ write
//! (path)    (pdfium)   (1.png … N.png)
//! ```
//!
//! 1. [`input`]  — validate the source path and its PDF magic bytes
//! 2. [`render`] — bind pdfium, load the document, rasterise one page at a
//!    time at the fixed resolution
//! 3. [`write`]  — persist each page losslessly as `<page>.png`

pub mod input;
pub mod render;
pub mod write;
