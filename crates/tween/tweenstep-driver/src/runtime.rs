use once_cell::sync::OnceCell;
use tokio::runtime::{Builder, Handle, Runtime};

use crate::error::DriverError;

static FALLBACK_RT: OnceCell<Runtime> = OnceCell::new();

/// Handle of the current Tokio runtime, or of a lazily built shared runtime
/// when called from plain threads. `worker_threads` only applies to the first
/// fallback build.
pub(crate) fn runtime_handle(worker_threads: usize) -> Result<Handle, DriverError> {
    if let Ok(handle) = Handle::try_current() {
        return Ok(handle);
    }

    let runtime = FALLBACK_RT.get_or_try_init(|| {
        tracing::debug!(worker_threads, "tween.runtime.fallback_init");
        Builder::new_multi_thread()
            .enable_all()
            .worker_threads(worker_threads)
            .thread_name("tweenstep-driver")
            .build()
            .map_err(|err| DriverError::Runtime {
                reason: err.to_string(),
            })
    })?;
    Ok(runtime.handle().clone())
}
