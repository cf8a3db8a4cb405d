// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::future::Future;

use common_exception::ErrorCode;
use common_exception::Result;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Bounded multi-threaded tokio runtime shared by the node clients.
/// The runtime itself is parked on a dedicated thread and torn down
/// through a close channel, so a `Runtime` value can be dropped from
/// inside another runtime's context without blocking it.
pub struct Runtime {
    handle: Handle,
    close: Option<oneshot::Sender<()>>,
}

impl Runtime {
    pub fn with_default_worker_threads() -> Result<Runtime> {
        Self::with_worker_threads(num_cpus::get())
    }

    pub fn with_worker_threads(workers: usize) -> Result<Runtime> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_io()
            .enable_time()
            .worker_threads(workers)
            .thread_name("quasar-runtime")
            .build()
            .map_err(|tokio_error| ErrorCode::TokioError(tokio_error.to_string()))?;

        let handle = runtime.handle().clone();
        let (close, closed) = oneshot::channel::<()>();
        std::thread::Builder::new()
            .name("quasar-runtime-keeper".to_string())
            .spawn(move || {
                // hold the runtime off any async context until closed
                let _ = runtime.block_on(closed);
            })
            .map_err(|io_error| ErrorCode::TokioError(io_error.to_string()))?;

        Ok(Runtime {
            handle,
            close: Some(close),
        })
    }

    pub fn spawn<F>(&self, task: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.handle.spawn(task)
    }

    /// Blocks the calling thread; only valid outside async contexts.
    pub fn block_on<F: Future>(&self, task: F) -> F::Output {
        self.handle.block_on(task)
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        if let Some(close) = self.close.take() {
            let _ = close.send(());
        }
    }
}
