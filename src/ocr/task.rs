//! Background license processing with cancellation
//!
//! A task runs the reader on its own thread after a fixed delay and hands the
//! result back over a channel. Cancelling (or dropping) the task stops it
//! before the reader runs; a result is never delivered after cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use super::LicenseReader;
use crate::error::{CoggnifyError, CoggnifyResult};
use crate::models::{CapturedImages, ExtractedLicense};

/// Granularity at which a sleeping task notices cancellation
const CANCEL_CHECK_INTERVAL: Duration = Duration::from_millis(25);

/// Outcome of polling a task
#[derive(Debug)]
pub enum TaskPoll {
    /// Still waiting out the delay or reading
    Pending,
    /// Finished; the result has been taken
    Ready(CoggnifyResult<ExtractedLicense>),
    /// Cancelled before completion
    Cancelled,
}

/// A license read running in the background
pub struct ProcessingTask {
    receiver: mpsc::Receiver<CoggnifyResult<ExtractedLicense>>,
    cancelled: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
    finished: bool,
}

impl ProcessingTask {
    /// Start reading `images` after `delay`
    pub fn spawn(
        reader: Arc<dyn LicenseReader>,
        images: CapturedImages,
        delay: Duration,
    ) -> Self {
        let (sender, receiver) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));

        let handle = {
            let cancelled = Arc::clone(&cancelled);
            thread::spawn(move || {
                let started = Instant::now();
                while let Some(remaining) = delay.checked_sub(started.elapsed()) {
                    if remaining.is_zero() || cancelled.load(Ordering::SeqCst) {
                        break;
                    }
                    thread::sleep(remaining.min(CANCEL_CHECK_INTERVAL));
                }

                if cancelled.load(Ordering::SeqCst) {
                    debug!("License processing cancelled");
                    return;
                }

                let result = reader.read(&images);
                // The receiver may already be gone; nothing to report to then
                let _ = sender.send(result);
            })
        };

        Self {
            receiver,
            cancelled,
            handle: Some(handle),
            finished: false,
        }
    }

    /// Check for a result without blocking
    pub fn poll(&mut self) -> TaskPoll {
        if self.is_cancelled() {
            return TaskPoll::Cancelled;
        }
        if self.finished {
            return TaskPoll::Ready(Err(CoggnifyError::Processing(
                "Result was already taken".into(),
            )));
        }

        match self.receiver.try_recv() {
            Ok(result) => {
                self.finished = true;
                self.join();
                TaskPoll::Ready(result)
            }
            Err(mpsc::TryRecvError::Empty) => TaskPoll::Pending,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.finished = true;
                self.join();
                TaskPoll::Ready(Err(CoggnifyError::Processing(
                    "License processing stopped unexpectedly".into(),
                )))
            }
        }
    }

    /// Stop the task; any pending result is discarded
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether the task was cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ProcessingTask {
    fn drop(&mut self) {
        if !self.finished {
            self.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::SimulatedLicenseReader;

    fn reader() -> Arc<dyn LicenseReader> {
        Arc::new(SimulatedLicenseReader)
    }

    fn wait_until_ready(task: &mut ProcessingTask) -> TaskPoll {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match task.poll() {
                TaskPoll::Pending if Instant::now() < deadline => {
                    thread::sleep(Duration::from_millis(5));
                }
                other => return other,
            }
        }
    }

    #[test]
    fn test_completes_after_delay() {
        let started = Instant::now();
        let mut task = ProcessingTask::spawn(
            reader(),
            CapturedImages::default(),
            Duration::from_millis(50),
        );

        match wait_until_ready(&mut task) {
            TaskPoll::Ready(Ok(record)) => assert_eq!(record.name, "JOHN DOE"),
            other => panic!("unexpected poll result: {:?}", other),
        }
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_pending_before_delay_elapses() {
        let mut task = ProcessingTask::spawn(
            reader(),
            CapturedImages::default(),
            Duration::from_secs(10),
        );
        assert!(matches!(task.poll(), TaskPoll::Pending));
        task.cancel();
    }

    #[test]
    fn test_cancel_discards_result() {
        let mut task = ProcessingTask::spawn(
            reader(),
            CapturedImages::default(),
            Duration::from_millis(200),
        );
        task.cancel();

        thread::sleep(Duration::from_millis(250));
        assert!(matches!(task.poll(), TaskPoll::Cancelled));
    }
}
