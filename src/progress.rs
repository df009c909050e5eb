//! Progress-callback trait for per-page conversion events.
//!
//! Inject an [`Arc<dyn ConvertProgress>`] via
//! [`crate::config::ConvertConfig::with_progress`] to receive an event as
//! each page lands on disk.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: callers
//! can forward events to a terminal progress bar, a log, or a GUI without
//! the library knowing anything about how the host application communicates.
//!
//! # Example
//!
//! ```rust
//! use pdf2png::{ConvertConfig, ConvertProgress};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingProgress {
//!     written: AtomicUsize,
//! }
//!
//! impl ConvertProgress for CountingProgress {
//!     fn on_page_written(&self, page_num: usize, total_pages: usize, filename: &str) {
//!         self.written.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("Saved page {page_num}/{total_pages} as {filename}");
//!     }
//! }
//!
//! let counter = Arc::new(CountingProgress { written: AtomicUsize::new(0) });
//! let config = ConvertConfig::new("doc.pdf", "pages")
//!     .with_progress(counter as Arc<dyn ConvertProgress>);
//! ```

use std::sync::Arc;

/// Shared handle to a progress callback.
pub type ProgressCallback = Arc<dyn ConvertProgress>;

/// Called by the conversion as it processes each page.
///
/// Pages are processed strictly in order on the calling thread, so no event
/// ever arrives out of sequence. All methods have default no-op
/// implementations so callers only override what they care about.
pub trait ConvertProgress: Send + Sync {
    /// Called once after the document has been opened, before any page is
    /// rendered.
    ///
    /// # Arguments
    /// * `total_pages` — number of pages the document contains
    fn on_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called after a page file has been written to disk.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages in the document
    /// * `filename`    — the file name written, e.g. `"3.png"`
    fn on_page_written(&self, page_num: usize, total_pages: usize, filename: &str) {
        let _ = (page_num, total_pages, filename);
    }

    /// Called once after the last page has been written.
    ///
    /// # Arguments
    /// * `pages_written` — number of files produced by the run
    fn on_complete(&self, pages_written: usize) {
        let _ = pages_written;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Recorder {
        started: AtomicUsize,
        pages: AtomicUsize,
    }

    impl ConvertProgress for Recorder {
        fn on_start(&self, total_pages: usize) {
            self.started.store(total_pages, Ordering::SeqCst);
        }

        fn on_page_written(&self, _page_num: usize, _total_pages: usize, _filename: &str) {
            self.pages.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn default_methods_are_no_ops() {
        struct Silent;
        impl ConvertProgress for Silent {}

        let cb: ProgressCallback = Arc::new(Silent);
        cb.on_start(3);
        cb.on_page_written(1, 3, "1.png");
        cb.on_complete(3);
    }

    #[test]
    fn overridden_methods_receive_events() {
        let recorder = Arc::new(Recorder {
            started: AtomicUsize::new(0),
            pages: AtomicUsize::new(0),
        });
        let cb: ProgressCallback = recorder.clone();

        cb.on_start(2);
        cb.on_page_written(1, 2, "1.png");
        cb.on_page_written(2, 2, "2.png");
        cb.on_complete(2);

        assert_eq!(recorder.started.load(Ordering::SeqCst), 2);
        assert_eq!(recorder.pages.load(Ordering::SeqCst), 2);
    }
}
