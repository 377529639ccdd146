use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Shared cancellation flag handed to background work.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Fail with [`Cancelled`] once the token has been cancelled.
    pub fn check(&self) -> anyhow::Result<()> {
        if self.is_cancelled() {
            return Err(Cancelled.into());
        }
        Ok(())
    }

    /// Sleep for `total` in short slices, returning early on cancellation.
    pub fn sleep(&self, total: Duration) -> anyhow::Result<()> {
        const SLICE: Duration = Duration::from_millis(25);
        let deadline = Instant::now() + total;
        loop {
            self.check()?;
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            std::thread::sleep(SLICE.min(deadline - now));
        }
    }
}

/// Error returned by work that observed cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("operation cancelled")
    }
}

impl std::error::Error for Cancelled {}

#[derive(Debug)]
pub enum JobStatus<T> {
    Running,
    Finished(anyhow::Result<T>),
    Cancelled,
}

/// One-shot work item running on its own thread.
///
/// Dropping the job cancels it, so the result of work started by a dialog
/// never outlives the dialog.
pub struct BackgroundJob<T> {
    name: String,
    cancel: CancelToken,
    rx: Receiver<anyhow::Result<T>>,
    handle: Option<JoinHandle<()>>,
    done: bool,
}

impl<T: Send + 'static> BackgroundJob<T> {
    pub fn spawn<F>(name: &str, work: F) -> anyhow::Result<Self>
    where
        F: FnOnce(&CancelToken) -> anyhow::Result<T> + Send + 'static,
    {
        let cancel = CancelToken::new();
        let token = cancel.clone();
        let (tx, rx) = channel();
        let handle = std::thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                let result = work(&token);
                let _ = tx.send(result);
            })?;
        tracing::debug!(job = name, "background job started");
        Ok(Self {
            name: name.to_string(),
            cancel,
            rx,
            handle: Some(handle),
            done: false,
        })
    }
}

impl<T> BackgroundJob<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cancel(&self) {
        if !self.done {
            tracing::debug!(job = %self.name, "background job cancelled");
        }
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Non-blocking check for the job's outcome.
    ///
    /// A cancelled job reports `Cancelled` even if its work finished. Once the
    /// outcome has been handed out the job is spent and reports `Cancelled`.
    pub fn poll(&mut self) -> JobStatus<T> {
        if self.done || self.cancel.is_cancelled() {
            self.done = true;
            return JobStatus::Cancelled;
        }
        match self.rx.try_recv() {
            Ok(result) => {
                self.done = true;
                if let Some(handle) = self.handle.take() {
                    let _ = handle.join();
                }
                match result {
                    Err(e) if e.is::<Cancelled>() => JobStatus::Cancelled,
                    other => JobStatus::Finished(other),
                }
            }
            Err(TryRecvError::Empty) => JobStatus::Running,
            Err(TryRecvError::Disconnected) => {
                self.done = true;
                tracing::error!(job = %self.name, "background job exited without a result");
                JobStatus::Finished(Err(anyhow::anyhow!("{} stopped unexpectedly", self.name)))
            }
        }
    }

    /// Block until the job reports, for callers outside the UI loop.
    pub fn wait(mut self, timeout: Duration) -> JobStatus<T> {
        let deadline = Instant::now() + timeout;
        loop {
            match self.poll() {
                JobStatus::Running if Instant::now() < deadline => {
                    std::thread::sleep(Duration::from_millis(5));
                }
                status => return status,
            }
        }
    }
}

impl<T> Drop for BackgroundJob<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
