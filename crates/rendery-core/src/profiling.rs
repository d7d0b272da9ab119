//! Profiling hooks built on `puffin`.
//!
//! Hot paths (layout, atlas insertion, tessellation) are annotated with
//! [`profile_function!`]. Scopes cost next to nothing until profiling is
//! switched on with [`init_profiling`].

use std::sync::OnceLock;

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Address the puffin HTTP server listens on by default.
pub const DEFAULT_PUFFIN_ADDR: &str = "127.0.0.1:8585";

/// Where profiling data goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Record scopes in-process only, e.g. for custom viewers or tests.
    ScopesOnly,
    /// Serve scopes to `puffin_viewer` over HTTP at the given address.
    PuffinHttp(&'static str),
}

impl Default for ProfilingBackend {
    fn default() -> Self {
        ProfilingBackend::PuffinHttp(DEFAULT_PUFFIN_ADDR)
    }
}

// Dropping the server stops it.
static PUFFIN_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Turn on scope recording for `backend`.
///
/// A server that fails to bind is logged and leaves scopes enabled. Only the
/// first server started in a process is kept.
///
/// ```no_run
/// use rendery_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::default());
/// ```
pub fn init_profiling(backend: ProfilingBackend) {
    puffin::set_scopes_on(true);
    let ProfilingBackend::PuffinHttp(addr) = backend else {
        tracing::debug!("Puffin scopes enabled without a server");
        return;
    };
    if PUFFIN_SERVER.get().is_some() {
        tracing::debug!("Puffin server already running");
        return;
    }
    match puffin_http::Server::new(addr) {
        Ok(server) => {
            tracing::info!("Puffin profiler listening on http://{}", addr);
            let _ = PUFFIN_SERVER.set(server);
        }
        Err(e) => tracing::error!("Failed to start puffin server on {}: {}", addr, e),
    }
}

pub fn is_profiling_enabled() -> bool {
    puffin::are_scopes_on()
}

/// Close the current profiling frame. Call once per rendered frame.
#[inline]
pub fn new_frame() {
    GlobalProfiler::lock().new_frame();
}
