//! Logging setup based on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,rendery_text=debug,rendery_render=debug,wgpu_core=warn";

/// Install a formatting subscriber with the default filter.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_FILTER`] when present.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a formatting subscriber with a custom fallback filter.
///
/// Does nothing if a global subscriber is already set, so tests may call it
/// repeatedly.
pub fn init_with_filter(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_filter("trace");
        tracing::debug!("logging initialized twice");
    }
}
