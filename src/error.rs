//! Error types for the pdf2png library.
//!
//! A single closed enumeration rather than a boxed `dyn Error`: every
//! failure the conversion can hit has a named variant, so callers and tests
//! match on the exact kind (missing backend, unreadable input, render fault,
//! filesystem fault) instead of string-matching a message.
//!
//! Messages are written for the person at the terminal: each names the path
//! or page involved and, where there is an obvious remedy, says what it is.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2png library.
#[derive(Debug, Error)]
pub enum Pdf2PngError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Source file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the source file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── Rendering backend errors ──────────────────────────────────────────
    /// The pdfium shared library could not be located or loaded.
    #[error(
        "PDF rendering backend (pdfium) is not available: {detail}\n\n\
To install it:\n\
  • Download a prebuilt library for your platform from\n\
    https://github.com/bblanchon/pdfium-binaries/releases\n\
  • Set PDFIUM_LIB_PATH to the library file (or its directory).\n"
    )]
    BackendMissing { detail: String },

    /// The backend could not parse the document (corrupt file, unsupported
    /// encryption, truncated download).
    #[error("PDF '{path}' could not be parsed: {detail}")]
    ParseFailed { path: PathBuf, detail: String },

    /// The backend returned an error while rasterising a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not encode or write a page image to disk.
    #[error("Failed to write page {page} to '{path}': {source}")]
    PageWriteFailed {
        page: usize,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Could not list the output directory while planning the clear step.
    #[error("Failed to read output directory '{path}': {source}")]
    OutputDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not delete a stale image from a previous run.
    #[error("Failed to remove stale image '{path}': {source}")]
    ClearFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create the output directory.
    #[error("Failed to create output directory '{path}': {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_missing_names_the_remedy() {
        let e = Pdf2PngError::BackendMissing {
            detail: "library not found".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("pdfium"), "got: {msg}");
        assert!(msg.contains("PDFIUM_LIB_PATH"), "got: {msg}");
        assert!(msg.contains("pdfium-binaries"), "got: {msg}");
    }

    #[test]
    fn rasterisation_failed_names_the_page() {
        let e = Pdf2PngError::RasterisationFailed {
            page: 7,
            detail: "bitmap allocation failed".into(),
        };
        assert!(e.to_string().contains("page 7"));
    }

    #[test]
    fn not_a_pdf_shows_magic_bytes() {
        let e = Pdf2PngError::NotAPdf {
            path: PathBuf::from("/tmp/photo.jpg"),
            magic: *b"\xff\xd8\xff\xe0",
        };
        let msg = e.to_string();
        assert!(msg.contains("photo.jpg"), "got: {msg}");
        assert!(msg.contains("255"), "got: {msg}");
    }

    #[test]
    fn page_write_failed_carries_source() {
        use std::error::Error as _;
        let io = std::io::Error::other("disk full");
        let e = Pdf2PngError::PageWriteFailed {
            page: 2,
            path: PathBuf::from("/out/2.png"),
            source: image::ImageError::IoError(io),
        };
        assert!(e.to_string().contains("page 2"));
        assert!(e.source().is_some());
    }
}
