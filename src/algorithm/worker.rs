//! Background enumeration with progress events and cooperative cancellation

use crate::algorithm::walls::{Progress, Strategy, Wall, WallBuilder};
use crate::io::configuration::{MAX_HEIGHT, MAX_WIDTH, WORKER_THREAD_NAME};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crossbeam_channel::{Receiver, unbounded};
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

/// Dimensions of one enumeration, as sent to a worker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallRequest {
    /// Width of every row in brick units
    pub width: i64,
    /// Number of rows in every wall
    pub height: usize,
}

impl WallRequest {
    /// Create a request
    pub const fn new(width: i64, height: usize) -> Self {
        Self { width, height }
    }

    /// Check the dimensions against the accepted ranges
    ///
    /// # Errors
    ///
    /// Returns an error if width is outside `1..=MAX_WIDTH` or height outside `1..=MAX_HEIGHT`
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_WIDTH).contains(&self.width) {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &format!("must be between 1 and {MAX_WIDTH}"),
            ));
        }
        if !(1..=MAX_HEIGHT).contains(&self.height) {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &format!("must be between 1 and {MAX_HEIGHT}"),
            ));
        }
        Ok(())
    }
}

/// Message posted by a worker thread
#[derive(Debug)]
pub enum WorkerEvent {
    /// Another unit of enumeration work finished
    Progress(Progress),
    /// The enumeration ended; always the last event
    Finished(Result<Vec<Wall>>),
}

/// An enumeration running on its own thread
///
/// The worker posts progress events followed by exactly one result. Dropping a
/// task before its result has been collected cancels the worker.
pub struct WallTask {
    request: WallRequest,
    events: Receiver<WorkerEvent>,
    abort: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl WallTask {
    /// Start enumerating on a background thread
    ///
    /// # Errors
    ///
    /// Returns an error if the operating system refuses to create the thread
    pub fn spawn(request: WallRequest, strategy: Strategy) -> Result<Self> {
        Self::spawn_with_abort(request, strategy, Arc::new(AtomicBool::new(false)))
    }

    /// Start enumerating with an externally owned abort flag
    ///
    /// The flag is checked before any work and after every progress unit. The
    /// compatibility relation is built on the worker thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the operating system refuses to create the thread
    pub fn spawn_with_abort(
        request: WallRequest,
        strategy: Strategy,
        abort: Arc<AtomicBool>,
    ) -> Result<Self> {
        Self::launch(request, strategy, None, abort)
    }

    /// Start enumerating over a relation that has already been built
    ///
    /// `builder` must hold the rows of `request.width`; the worker only reads
    /// `request.height` from the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the operating system refuses to create the thread
    pub fn spawn_with_builder(
        request: WallRequest,
        strategy: Strategy,
        builder: Arc<WallBuilder>,
    ) -> Result<Self> {
        Self::launch(
            request,
            strategy,
            Some(builder),
            Arc::new(AtomicBool::new(false)),
        )
    }

    fn launch(
        request: WallRequest,
        strategy: Strategy,
        builder: Option<Arc<WallBuilder>>,
        abort: Arc<AtomicBool>,
    ) -> Result<Self> {
        let (sender, events) = unbounded();
        let worker_abort = Arc::clone(&abort);

        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                tracing::debug!(
                    width = request.width,
                    height = request.height,
                    ?strategy,
                    prebuilt = builder.is_some(),
                    "worker started"
                );

                let result = if worker_abort.load(Ordering::Relaxed) {
                    Err(AlgorithmError::Cancelled)
                } else {
                    let builder = builder
                        .unwrap_or_else(|| Arc::new(WallBuilder::for_width(request.width)));
                    builder.enumerate_with(request.height, strategy, |progress| {
                        if worker_abort.load(Ordering::Relaxed) {
                            return ControlFlow::Break(());
                        }
                        // The receiver may have gone away; the result is then discarded too
                        let _ = sender.send(WorkerEvent::Progress(progress));
                        ControlFlow::Continue(())
                    })
                };

                tracing::debug!(ok = result.is_ok(), "worker finished");
                let _ = sender.send(WorkerEvent::Finished(result));
            })
            .map_err(|source| AlgorithmError::WorkerSpawn { source })?;

        Ok(Self {
            request,
            events,
            abort,
            handle: Some(handle),
        })
    }

    /// The dimensions being enumerated
    pub const fn request(&self) -> WallRequest {
        self.request
    }

    /// Shared flag that stops the worker when set
    pub fn abort_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.abort)
    }

    /// Ask the worker to stop at the next progress unit
    pub fn cancel(&self) {
        self.abort.store(true, Ordering::Relaxed);
    }

    /// Test if cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.abort.load(Ordering::Relaxed)
    }

    /// Take the next pending event without blocking
    pub fn try_event(&self) -> Option<WorkerEvent> {
        self.events.try_recv().ok()
    }

    /// Block until the worker posts its result
    ///
    /// Progress events received on the way are passed to `on_progress`.
    ///
    /// # Errors
    ///
    /// Returns the enumeration error, [`AlgorithmError::WorkerPanicked`] if the thread
    /// panicked, or [`AlgorithmError::WorkerDisconnected`] if it exited without a result
    pub fn wait<F>(mut self, mut on_progress: F) -> Result<Vec<Wall>>
    where
        F: FnMut(Progress),
    {
        let outcome = loop {
            match self.events.recv() {
                Ok(WorkerEvent::Progress(progress)) => on_progress(progress),
                Ok(WorkerEvent::Finished(result)) => break Some(result),
                Err(_disconnected) => break None,
            }
        };

        match (outcome, self.handle.take().map(JoinHandle::join)) {
            (_, Some(Err(_panic))) => Err(AlgorithmError::WorkerPanicked),
            (Some(result), _) => result,
            (None, _) => Err(AlgorithmError::WorkerDisconnected),
        }
    }
}

impl Drop for WallTask {
    fn drop(&mut self) {
        // A joined worker has nothing left to stop, and a shared flag must stay clear
        if self.handle.is_some() {
            self.cancel();
        }
    }
}
