use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Installs a Ctrl-C / SIGTERM handler that raises the returned flag.
pub fn setup_shutdown_signal() -> Result<Arc<AtomicBool>> {
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let signal_clone = Arc::clone(&shutdown_signal);

    ctrlc::set_handler(move || {
        signal_clone.store(true, Ordering::SeqCst);
        eprintln!("\nInterrupt received, stopping and cleaning up...");
    })
    .context("Failed to install the interrupt handler")?;

    Ok(shutdown_signal)
}

#[must_use]
pub fn is_shutdown_requested(shutdown_signal: &AtomicBool) -> bool {
    shutdown_signal.load(Ordering::SeqCst)
}
