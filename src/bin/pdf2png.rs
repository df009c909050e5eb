//! CLI binary for pdf2png.
//!
//! A thin shim over the library crate: parses flags, asks the one
//! destructive question, applies the clear plan, and prints progress and
//! the final summary.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2png::{convert, ClearPlan, ConvertConfig, ConvertProgress, ProgressCallback};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: a live progress bar plus one log line per
/// saved page. Pages arrive strictly in order, so no out-of-order handling
/// is needed.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Create a callback whose progress-bar length is set by `on_start`
    /// (called once the document has been opened and counted).
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_start

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.set_message("Opening PDF…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar })
    }
}

impl ConvertProgress for CliProgress {
    fn on_start(&self, total_pages: usize) {
        // Switch from spinner-only style to a full bar now that the page
        // count is known.
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} pages  ⏱ {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        self.bar.set_length(total_pages as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Converting");
    }

    fn on_page_written(&self, page_num: usize, total_pages: usize, filename: &str) {
        self.bar.println(format!(
            "  {} Saved page {:>3}/{:<3} as {}",
            green("✓"),
            page_num,
            total_pages,
            dim(filename),
        ));
        self.bar.inc(1);
    }

    fn on_complete(&self, _pages_written: usize) {
        self.bar.finish_and_clear();
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert every page of a PDF into 1.png, 2.png, … in ./pages
  pdf2png document.pdf pages

  # Machine-readable summary on stdout
  pdf2png --json document.pdf pages

  # Without the progress bar (per-page log lines on stderr instead)
  pdf2png --no-progress document.pdf pages

THE CONFIRMATION PROMPT:
  pdf2png always asks before touching the output directory, because
  answering y deletes every existing *.png file in it. Anything other than
  y (or Y) cancels with no changes to the filesystem.

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Path to an existing pdfium library (the file itself or
                    its directory). Without it, the system library search
                    path is used.

SETUP:
  pdf2png renders through PDFium, Chromium's PDF engine. Download a
  prebuilt library for your platform from
    https://github.com/bblanchon/pdfium-binaries/releases
  and point PDFIUM_LIB_PATH at it.
"#;

/// Rasterise every page of a PDF into numbered PNG images.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2png",
    version,
    about = "Rasterise every page of a PDF into numbered PNG images",
    long_about = "Rasterise every page of a PDF document into numbered PNG images \
(1.png … N.png) inside a directory, clearing PNGs left over from a previous run \
after an interactive confirmation.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the source PDF file.
    input: PathBuf,

    /// Directory that receives 1.png … N.png (created if missing).
    output_dir: PathBuf,

    /// Print the conversion summary as JSON on stdout.
    #[arg(long, env = "PDF2PNG_JSON")]
    json: bool,

    /// Disable the progress bar.
    #[arg(long, env = "PDF2PNG_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2PNG_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the prompt.
    #[arg(short, long, env = "PDF2PNG_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs while the progress bar is active;
    // the bar provides the per-page feedback. Without the bar the library's
    // "Saved page N as N.png" info lines take over that job.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Confirm before clearing ──────────────────────────────────────────
    let plan = ClearPlan::scan(&cli.output_dir).context("Failed to scan output directory")?;

    let stdin = io::stdin();
    let confirmed = prompt_confirmation(&plan, &mut stdin.lock(), &mut io::stdout())
        .context("Failed to read confirmation")?;

    if !confirmed {
        println!("Conversion cancelled.");
        return Ok(());
    }

    plan.apply().context("Failed to clear output directory")?;

    // ── Convert ──────────────────────────────────────────────────────────
    if !cli.quiet && !cli.json {
        println!("Converting PDF: {}", cli.input.display());
        println!("This may take a moment...");
    }

    let mut config = ConvertConfig::new(&cli.input, &cli.output_dir);
    if show_progress {
        config = config.with_progress(CliProgress::new() as ProgressCallback);
    }

    let summary = convert(&config).context("Conversion failed")?;

    // ── Summary ──────────────────────────────────────────────────────────
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?
        );
    } else if !cli.quiet {
        println!(
            "\n{} Successfully converted {} pages to {}",
            green("✔"),
            bold(&summary.pages_written.to_string()),
            bold(&summary.output_dir.display().to_string()),
        );
        eprintln!(
            "   {}",
            dim(&format!(
                "{}ms rendering / {}ms total",
                summary.render_duration_ms, summary.total_duration_ms
            )),
        );
    }

    Ok(())
}

/// Ask the one destructive question and read the answer.
///
/// Returns `true` only for `y`/`Y`; every other answer (including `yes`)
/// cancels.
fn prompt_confirmation(
    plan: &ClearPlan,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<bool> {
    if !plan.stale_pngs().is_empty() {
        writeln!(
            out,
            "{} existing PNG image(s) will be deleted.",
            plan.stale_pngs().len()
        )?;
    }
    write!(
        out,
        "This will replace all PNG images in {}. Continue? (y/n): ",
        plan.output_dir().display()
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
