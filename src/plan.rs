//! Two-phase clearing of stale output.
//!
//! Deleting files out of a user's directory is the one destructive action in
//! this crate, so it is split in two: [`ClearPlan::scan`] computes what a
//! confirmed run would delete (and whether the output directory must be
//! created) without touching anything, and [`ClearPlan::apply`] performs
//! exactly that. The split lets an interactive caller show the user what is
//! at stake before asking for confirmation, and lets tests drive the
//! destructive path against a temp directory with no terminal involved.
//!
//! Only regular files with a `png` extension are ever deleted. Everything
//! else in the directory (other formats, subdirectories, dotfiles) is
//! left alone.

use crate::error::Pdf2PngError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What a confirmed run will do to the output directory before conversion.
///
/// Produced by [`ClearPlan::scan`]; consumed by [`ClearPlan::apply`].
#[derive(Debug, Clone)]
pub struct ClearPlan {
    output_dir: PathBuf,
    stale_pngs: Vec<PathBuf>,
    create_dir: bool,
}

impl ClearPlan {
    /// Inspect `output_dir` and plan the clear step. Pure: reads the
    /// directory listing, changes nothing.
    ///
    /// A missing directory yields an empty delete list and marks the
    /// directory for creation.
    pub fn scan(output_dir: impl Into<PathBuf>) -> Result<Self, Pdf2PngError> {
        let output_dir = output_dir.into();

        if !output_dir.exists() {
            debug!("Output directory missing, will create: {}", output_dir.display());
            return Ok(Self {
                output_dir,
                stale_pngs: Vec::new(),
                create_dir: true,
            });
        }

        let entries =
            std::fs::read_dir(&output_dir).map_err(|source| Pdf2PngError::OutputDirUnreadable {
                path: output_dir.clone(),
                source,
            })?;

        let mut stale_pngs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Pdf2PngError::OutputDirUnreadable {
                path: output_dir.clone(),
                source,
            })?;
            let path = entry.path();
            let is_png = path.extension().is_some_and(|ext| ext == "png");
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if is_png && is_file {
                stale_pngs.push(path);
            }
        }
        // Sorted so prompts and tests see a stable listing.
        stale_pngs.sort();

        debug!(
            "Scanned {}: {} stale PNG image(s)",
            output_dir.display(),
            stale_pngs.len()
        );

        Ok(Self {
            output_dir,
            stale_pngs,
            create_dir: false,
        })
    }

    /// The directory this plan operates on.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Files a confirmed run will delete, in sorted order.
    pub fn stale_pngs(&self) -> &[PathBuf] {
        &self.stale_pngs
    }

    /// Whether the output directory is missing and will be created.
    pub fn create_dir(&self) -> bool {
        self.create_dir
    }

    /// True when applying the plan would change nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.stale_pngs.is_empty() && !self.create_dir
    }

    /// Execute the plan: delete every listed PNG, then create the output
    /// directory if the scan found it missing.
    ///
    /// Destructive and irreversible — no backup is taken. Stops at the
    /// first file that cannot be removed.
    pub fn apply(&self) -> Result<(), Pdf2PngError> {
        for path in &self.stale_pngs {
            std::fs::remove_file(path).map_err(|source| Pdf2PngError::ClearFailed {
                path: path.clone(),
                source,
            })?;
            debug!("Removed stale image: {}", path.display());
        }
        if !self.stale_pngs.is_empty() {
            info!("Removed {} stale PNG image(s)", self.stale_pngs.len());
        }

        if self.create_dir {
            std::fs::create_dir_all(&self.output_dir).map_err(|source| {
                Pdf2PngError::CreateDirFailed {
                    path: self.output_dir.clone(),
                    source,
                }
            })?;
            info!("Created output directory: {}", self.output_dir.display());
        }

        Ok(())
    }
}
