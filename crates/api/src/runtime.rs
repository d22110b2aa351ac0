//! Tokio runtime selection.

use tokio::runtime::{Builder, Runtime};

/// Build the runtime that drives the server.
///
/// `0` or `1` workers gives a current-thread runtime (one async server on
/// the main thread); anything larger gives a multi-threaded runtime with that
/// many worker threads.
pub fn build_runtime(workers_count: usize) -> std::io::Result<Runtime> {
    if workers_count <= 1 {
        Builder::new_current_thread().enable_all().build()
    } else {
        Builder::new_multi_thread()
            .worker_threads(workers_count)
            .thread_name("basic-template-worker")
            .enable_all()
            .build()
    }
}

#[cfg(test)]
mod tests {
    use tokio::runtime::RuntimeFlavor;

    use super::*;

    #[test]
    fn single_worker_uses_current_thread_runtime() {
        let runtime = build_runtime(1).unwrap();
        assert_eq!(runtime.handle().runtime_flavor(), RuntimeFlavor::CurrentThread);
        assert_eq!(runtime.block_on(async { 2 + 2 }), 4);
    }

    #[test]
    fn zero_workers_falls_back_to_current_thread_runtime() {
        let runtime = build_runtime(0).unwrap();
        assert_eq!(runtime.handle().runtime_flavor(), RuntimeFlavor::CurrentThread);
    }

    #[test]
    fn several_workers_use_multi_thread_runtime() {
        let runtime = build_runtime(3).unwrap();
        assert_eq!(runtime.handle().runtime_flavor(), RuntimeFlavor::MultiThread);
        assert_eq!(runtime.metrics().num_workers(), 3);
    }
}
