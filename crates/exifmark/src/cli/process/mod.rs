//! Folder processing: the default `exifmark <FOLDER>` action.

mod batch;
mod setup;

use std::path::Path;

use exifmark_core::{Config, ProcessingStats};

use batch::process_batch;
use setup::setup_processor;

/// Process every photo at `input` and return the batch statistics.
///
/// A missing input or font is fatal. Failures on individual photos are
/// logged and counted, and the batch carries on.
pub fn execute(input: &Path, config: &Config) -> anyhow::Result<ProcessingStats> {
    let processor = setup_processor(input, config)?;

    let discovery = processor.discover(input)?;
    tracing::debug!(
        "Found {} entries at {:?}",
        discovery.images.len() + discovery.skipped.len(),
        input
    );
    if discovery.images.is_empty() {
        tracing::warn!("No JPEG files found at {:?}", input);
    } else {
        tracing::info!("Found {} photo(s) to process", discovery.images.len());
    }

    Ok(process_batch(&processor, discovery))
}
