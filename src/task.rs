//! Background task dispatch for one-shot transforms.
//!
//! CPU-bound compress/decompress calls are moved off the caller's task onto
//! the runtime's blocking thread pool. Every background task builds its own
//! [`Codec`] so unrelated callers never contend on a shared context, and the
//! input is copied before dispatch so the caller's borrow ends at the call
//! site. Each submission resolves exactly once, either to the transformed
//! bytes or to an error; failures inside the background task (including
//! panics) are captured and surface through the returned `Result`, never as an
//! unhandled fault.
//!
//! Argument validation happens synchronously before anything is dispatched:
//! an oversized input fails without a single byte copied or a task spawned.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task;

use crate::codec::Codec;
use crate::error::{CodecError, Result};
use crate::{Level, MAX_INPUT_SIZE};

fn check_input_size(data: &[u8]) -> Result<()> {
    if data.len() > MAX_INPUT_SIZE {
        return Err(CodecError::input_too_large(data.len(), MAX_INPUT_SIZE));
    }
    Ok(())
}

async fn run<T, F>(job: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    task::spawn_blocking(job)
        .await
        .map_err(|err| CodecError::task_failed(err.to_string()))?
}

/// Compress a buffer on the blocking thread pool.
///
/// Semantically identical to [`crate::compress`], with the work performed off
/// the caller's task. The input is copied up front, so the borrow does not
/// extend into the background task.
pub async fn compress_async(data: &[u8], level: Level) -> Result<Vec<u8>> {
    check_input_size(data)?;
    let input = data.to_vec();
    run(move || Codec::new().compress(&input, level)).await
}

/// Decompress a buffer on the blocking thread pool.
///
/// Semantically identical to [`crate::decompress`]; bound checking runs inside
/// the task, before the output allocation.
pub async fn decompress_async(data: &[u8], max_output_size: usize) -> Result<Vec<u8>> {
    check_input_size(data)?;
    let input = data.to_vec();
    run(move || Codec::new().decompress(&input, max_output_size)).await
}

/// A dispatcher that bounds how many transforms run concurrently.
///
/// Admission is controlled by a semaphore sized at construction; submissions
/// past the limit wait their turn instead of piling onto the blocking pool.
/// Cloning is cheap and shares the same limit.
#[derive(Clone)]
pub struct Dispatcher {
    permits: Arc<Semaphore>,
}

impl Dispatcher {
    /// Create a dispatcher allowing up to `max_tasks` concurrent transforms.
    ///
    /// `max_tasks` is clamped to at least 1.
    pub fn new(max_tasks: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_tasks.max(1))),
        }
    }

    /// Compress a buffer, waiting for an execution slot first.
    pub async fn compress(&self, data: &[u8], level: Level) -> Result<Vec<u8>> {
        check_input_size(data)?;
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|err| CodecError::task_failed(err.to_string()))?;
        let input = data.to_vec();
        run(move || Codec::new().compress(&input, level)).await
    }

    /// Decompress a buffer, waiting for an execution slot first.
    pub async fn decompress(&self, data: &[u8], max_output_size: usize) -> Result<Vec<u8>> {
        check_input_size(data)?;
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|err| CodecError::task_failed(err.to_string()))?;
        let input = data.to_vec();
        run(move || Codec::new().decompress(&input, max_output_size)).await
    }
}

impl Default for Dispatcher {
    /// Size the dispatcher from the host's available parallelism.
    fn default() -> Self {
        let parallelism = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(parallelism)
    }
}
