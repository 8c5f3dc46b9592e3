//! Run-on-main primitive. Background flows schedule closures here; the
//! host's frame loop drains them once per tick. Direct mutation of session
//! or player state from a worker thread is unsafe, so enforcement actions
//! only ever travel through this queue.

use std::sync::mpsc;

type FrameTask = Box<dyn FnOnce() + Send + 'static>;

/// Sending half, held by the coordinator and cloned into flows.
#[derive(Clone)]
pub struct FrameQueue {
    tx: mpsc::Sender<FrameTask>,
}

/// Receiving half, owned by the host's frame loop.
pub struct FrameDrain {
    rx: mpsc::Receiver<FrameTask>,
}

/// Create a connected queue/drain pair.
pub fn frame_queue() -> (FrameQueue, FrameDrain) {
    let (tx, rx) = mpsc::channel();
    (FrameQueue { tx }, FrameDrain { rx })
}

impl FrameQueue {
    /// Schedule a task for the next drain. A send after the drain is gone
    /// means the host is shutting down; the task is dropped.
    pub fn schedule(&self, task: impl FnOnce() + Send + 'static) {
        if self.tx.send(Box::new(task)).is_err() {
            tracing::warn!("frame queue closed, dropping scheduled task");
        }
    }
}

impl FrameDrain {
    /// Run every task scheduled so far. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.rx.try_recv() {
            task();
            ran += 1;
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn tasks_run_only_on_drain() {
        let (queue, mut drain) = frame_queue();
        let hits = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let hits = Arc::clone(&hits);
            queue.schedule(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        assert_eq!(drain.run_pending(), 3);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
        assert_eq!(drain.run_pending(), 0);
    }

    #[test]
    fn tasks_cross_threads() {
        let (queue, mut drain) = frame_queue();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = Arc::clone(&hits);
        let handle = std::thread::spawn(move || {
            queue.schedule(move || {
                hits_clone.fetch_add(1, Ordering::SeqCst);
            });
        });
        handle.join().unwrap();

        assert_eq!(drain.run_pending(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
