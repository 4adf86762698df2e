use crate::errors::AppResult;

/// Runtime for the live status view. The CLI never needs more than one thread.
pub fn single_thread_runtime() -> AppResult<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
