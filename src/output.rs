//! Conversion result types.

use serde::Serialize;
use std::path::PathBuf;

/// Summary of a completed conversion run.
///
/// Serialisable so a caller (or the CLI's `--json` flag) can log or archive
/// the outcome of a run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    /// Number of pages rasterised and written.
    pub pages_written: usize,

    /// Directory the PNGs were written into.
    pub output_dir: PathBuf,

    /// Written files in page order: `1.png` … `N.png`.
    pub files: Vec<PathBuf>,

    /// Wall-clock time spent inside the rendering backend, in milliseconds.
    pub render_duration_ms: u64,

    /// Total wall-clock duration of the run, in milliseconds.
    pub total_duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_to_json() {
        let summary = ConversionSummary {
            pages_written: 2,
            output_dir: PathBuf::from("pages"),
            files: vec![PathBuf::from("pages/1.png"), PathBuf::from("pages/2.png")],
            render_duration_ms: 120,
            total_duration_ms: 140,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["pages_written"], 2);
        assert_eq!(json["files"].as_array().unwrap().len(), 2);
    }
}
