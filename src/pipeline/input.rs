//! Source validation: confirm the input path points at a readable PDF.
//!
//! ## Why check magic bytes here?
//!
//! pdfium reports a wrong or truncated file as an opaque load failure.
//! Checking the `%PDF` header up front lets us name the actual problem
//! (wrong file handed in, interrupted download) before the backend is even
//! bound, and without parsing anything.

use crate::error::Pdf2PngError;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Validate that `path` exists, is readable, and starts with `%PDF`.
pub fn validate_source(path: &Path) -> Result<(), Pdf2PngError> {
    if !path.exists() {
        return Err(Pdf2PngError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    // Check read permission by attempting to open
    match std::fs::File::open(path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(Pdf2PngError::NotAPdf {
                    path: path.to_path_buf(),
                    magic,
                });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2PngError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(Pdf2PngError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("Validated source PDF: {}", path.display());
    Ok(())
}
