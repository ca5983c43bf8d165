//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Logs progress information about domain processing.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `completed` - Atomic counter of completed domains
pub fn log_progress(start_time: std::time::Instant, completed: &Arc<AtomicUsize>) {
    let elapsed = start_time.elapsed();
    let done = completed.load(Ordering::SeqCst);
    let elapsed_secs = elapsed.as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        done as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} domains in {:.2} seconds (~{:.2} domains/sec)",
        done, elapsed_secs, rate
    );
}
