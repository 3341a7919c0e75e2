//! Progress display module
//!
//! Diagnostics, the optional progress bar and the run summary all go to
//! stderr so that stdout carries nothing but the report.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a bytes-based progress bar, or a hidden one when `visible` is false
pub fn create_bytes_progress_bar(total_bytes: u64, msg: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::with_draw_target(Some(total_bytes), ProgressDrawTarget::stderr());

    if let Ok(style) = ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓░"));
    }

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Processing statistics
///
/// Counters are atomic so that parallel counting workers can share one
/// instance.
#[derive(Debug)]
pub struct ProcessingStats {
    pub total_bytes: AtomicU64,
    pub total_lines: AtomicU64,
    pub total_tokens: AtomicU64,
    pub skipped_tokens: AtomicU64,
    pub distinct_words: AtomicU64,
    pub report_lines: AtomicU64,
    pub start_time: Instant,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self {
            total_bytes: AtomicU64::new(0),
            total_lines: AtomicU64::new(0),
            total_tokens: AtomicU64::new(0),
            skipped_tokens: AtomicU64::new(0),
            distinct_words: AtomicU64::new(0),
            report_lines: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn add_bytes(&self, size: u64) {
        self.total_bytes.fetch_add(size, Ordering::Relaxed);
    }

    pub fn add_line(&self) {
        self.total_lines.fetch_add(1, Ordering::Relaxed);
    }

    /// Record `seen` tokens of which `skipped` were blacklisted
    pub fn add_tokens(&self, seen: u64, skipped: u64) {
        self.total_tokens.fetch_add(seen, Ordering::Relaxed);
        self.skipped_tokens.fetch_add(skipped, Ordering::Relaxed);
    }

    pub fn set_distinct_words(&self, count: u64) {
        self.distinct_words.store(count, Ordering::Relaxed);
    }

    pub fn set_report_lines(&self, count: u64) {
        self.report_lines.store(count, Ordering::Relaxed);
    }

    pub fn get_total_bytes(&self) -> u64 {
        self.total_bytes.load(Ordering::Relaxed)
    }

    pub fn get_total_lines(&self) -> u64 {
        self.total_lines.load(Ordering::Relaxed)
    }

    pub fn get_total_tokens(&self) -> u64 {
        self.total_tokens.load(Ordering::Relaxed)
    }

    pub fn get_skipped_tokens(&self) -> u64 {
        self.skipped_tokens.load(Ordering::Relaxed)
    }

    /// Tokens that made it into the word counts
    pub fn get_counted_tokens(&self) -> u64 {
        self.get_total_tokens().saturating_sub(self.get_skipped_tokens())
    }

    pub fn get_distinct_words(&self) -> u64 {
        self.distinct_words.load(Ordering::Relaxed)
    }

    pub fn get_report_lines(&self) -> u64 {
        self.report_lines.load(Ordering::Relaxed)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print the run summary to stderr
    pub fn print_summary(&self) {
        let elapsed = self.elapsed();

        print_header("Summary");
        print_info(&format!(
            "Input:          {} in {} lines",
            ByteSize(self.get_total_bytes()),
            self.get_total_lines()
        ));
        print_info(&format!("Tokens:         {}", self.get_total_tokens()));
        print_info(&format!("Blacklisted:    {}", self.get_skipped_tokens()));
        print_info(&format!("Counted:        {}", self.get_counted_tokens()));
        print_info(&format!("Distinct words: {}", self.get_distinct_words()));
        print_info(&format!("Report lines:   {}", self.get_report_lines()));
        print_info(&format!("Time:           {:.2?}", elapsed));
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
