// src/logging.rs

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over the
/// default filter. Safe to call more than once.
pub fn init() {
    if INSTALLED.set(()).is_err() {
        return; // already installed
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stock_dashboard=info,dashboard=info,warn"));

    // Another subscriber may already be set by the embedding program.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(INSTALLED.get().is_some());
    }
}
