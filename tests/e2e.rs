//! End-to-end integration tests for pdf2png.
//!
//! These tests need a real pdfium library and a real PDF file, so they are
//! gated behind the `E2E_ENABLED` environment variable and do not run in CI
//! unless explicitly requested.
//!
//! Run with:
//!   E2E_ENABLED=1 PDF2PNG_E2E_PDF=test_cases/sample.pdf cargo test --test e2e -- --nocapture

use pdf2png::{convert, ClearPlan, ConvertConfig};
use std::path::{Path, PathBuf};

/// Skip this test unless E2E_ENABLED is set *and* a test PDF is configured.
macro_rules! e2e_skip_unless_ready {
    () => {{
        if std::env::var("E2E_ENABLED").is_err() {
            println!("SKIP — set E2E_ENABLED=1 to run e2e tests");
            return;
        }
        match std::env::var("PDF2PNG_E2E_PDF") {
            Ok(p) => {
                let p = PathBuf::from(p);
                if !p.exists() {
                    println!("SKIP — test PDF not found: {}", p.display());
                    return;
                }
                p
            }
            Err(_) => {
                println!("SKIP — set PDF2PNG_E2E_PDF to a sample PDF path");
                return;
            }
        }
    }};
}

fn count_pngs(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "png"))
        .count()
}

#[test]
fn converts_every_page_into_sequentially_named_files() {
    let pdf = e2e_skip_unless_ready!();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("pages");

    ClearPlan::scan(&out).unwrap().apply().unwrap();

    let summary = convert(&ConvertConfig::new(&pdf, &out)).expect("conversion should succeed");

    assert!(summary.pages_written >= 1);
    assert_eq!(summary.files.len(), summary.pages_written);

    // 1.png … N.png, no gaps, no extras.
    for page in 1..=summary.pages_written {
        assert!(
            out.join(format!("{page}.png")).exists(),
            "missing {page}.png"
        );
    }
    assert_eq!(count_pngs(&out), summary.pages_written);

    // Each file is a decodable raster.
    let first = image::open(out.join("1.png")).expect("1.png should decode");
    assert!(first.width() > 0 && first.height() > 0);

    println!(
        "✓ {} pages rendered in {}ms",
        summary.pages_written, summary.render_duration_ms
    );
}

#[test]
fn stale_images_do_not_survive_a_cleared_rerun() {
    let pdf = e2e_skip_unless_ready!();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("pages");
    std::fs::create_dir_all(&out).unwrap();

    // Page numbers no real document here will reach.
    for stale in 9001..=9005 {
        std::fs::write(out.join(format!("{stale}.png")), b"stale").unwrap();
    }
    std::fs::write(out.join("keep.txt"), b"keep").unwrap();

    ClearPlan::scan(&out).unwrap().apply().unwrap();
    let summary = convert(&ConvertConfig::new(&pdf, &out)).expect("conversion should succeed");

    for stale in 9001..=9005 {
        assert!(!out.join(format!("{stale}.png")).exists(), "{stale}.png survived");
    }
    assert!(out.join("keep.txt").exists());
    assert_eq!(count_pngs(&out), summary.pages_written);
}

#[test]
fn output_directory_is_created_when_missing() {
    let pdf = e2e_skip_unless_ready!();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deeply").join("nested").join("pages");
    assert!(!out.exists());

    ClearPlan::scan(&out).unwrap().apply().unwrap();
    let summary = convert(&ConvertConfig::new(&pdf, &out)).expect("conversion should succeed");

    assert!(out.is_dir());
    assert_eq!(count_pngs(&out), summary.pages_written);
}
