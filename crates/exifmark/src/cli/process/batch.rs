//! Batch processing: sequential per-photo loop with progress and summary.

use std::time::Instant;

use exifmark_core::format::summary_lines;
use exifmark_core::pipeline::SkippedEntry;
use exifmark_core::{Discovery, ImageProcessor, ProcessedImage, ProcessingStats, SkipReason};

/// Stdout notice for an entry that isn't a photo, or `None` for a previous
/// output, which is only logged.
fn skip_notice(entry: &SkippedEntry) -> Option<String> {
    match entry.reason {
        SkipReason::Unsupported => Some(format!("nothing to do here {}", entry.file_name())),
        SkipReason::Generated => None,
    }
}

/// Warnings to surface for a photo that was written.
fn result_warnings(result: &ProcessedImage) -> Vec<String> {
    let mut warnings = Vec::new();
    if !result.text_fits {
        warnings.push(format!(
            "Equipment text for {} is wider than the image even at the smallest font size",
            result.file_name
        ));
    }
    warnings
}

/// Process discovered photos one at a time, isolating per-file failures.
pub fn process_batch(processor: &ImageProcessor, discovery: Discovery) -> ProcessingStats {
    for entry in &discovery.skipped {
        match skip_notice(entry) {
            Some(notice) => println!("{notice}"),
            None => tracing::warn!("Skipping previous output {}", entry.file_name()),
        }
    }

    let progress = create_progress_bar(discovery.images.len() as u64);
    let mut stats = ProcessingStats {
        skipped: discovery.skipped.len(),
        ..Default::default()
    };
    let start_time = Instant::now();

    for path in &discovery.images {
        match processor.process(path) {
            Ok(result) => {
                stats.succeeded += 1;
                // Anything printed while the bar is drawn has to go through suspend
                progress.suspend(|| {
                    for warning in result_warnings(&result) {
                        tracing::warn!("{warning}");
                    }
                    for line in summary_lines(&result.file_name, &result.exif) {
                        println!("{line}");
                    }
                    tracing::debug!("Wrote {:?} for {:?}", result.output, result.source);
                });
            }
            Err(e) => {
                stats.failed += 1;
                progress.suspend(|| tracing::error!("Failed: {:?} - {}", path, e));
            }
        }

        progress.inc(1);
        let elapsed = start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            let rate = (stats.succeeded + stats.failed) as f64 / elapsed;
            progress.set_message(format!("{:.1} img/sec", rate));
        }
    }
    progress.finish_and_clear();

    stats.total_seconds = start_time.elapsed().as_secs_f64();
    stats.images_per_second = if stats.total_seconds > 0.0 {
        (stats.succeeded + stats.failed) as f64 / stats.total_seconds
    } else {
        0.0
    };

    if !discovery.images.is_empty() {
        print_summary(&stats);
    }
    stats
}

fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        )
        .map(|style| style.progress_chars("##-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message("starting...");
    pb
}

/// Print a formatted summary table after batch processing.
fn print_summary(stats: &ProcessingStats) {
    let total = stats.succeeded + stats.failed + stats.skipped;

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Succeeded:    {:>8}", stats.succeeded);
    if stats.failed > 0 {
        eprintln!("    Failed:       {:>8}", stats.failed);
    }
    if stats.skipped > 0 {
        eprintln!("    Skipped:      {:>8}", stats.skipped);
    }
    eprintln!("  ------------------------------------");
    eprintln!("    Total:        {:>8}", total);
    eprintln!("    Duration:     {:>7.1}s", stats.total_seconds);
    eprintln!("    Rate:         {:>7.1} img/sec", stats.images_per_second);
    eprintln!("  ====================================");
}
