// src/gui/worker.rs
//
// Runs one catalog load on a worker thread and hands the result back over a
// channel. The UI thread polls; a worker that dies without sending (panic)
// shows up as a disconnected channel and is reported as an interrupted load.

use std::{
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use log::{debug, warn};

use crate::{catalog::Catalog, controller::LoadTicket, error::LoadError, source::Source};

pub type LoadResult = Result<Catalog, LoadError>;

pub struct PendingLoad {
    ticket: LoadTicket,
    source_name: String,
    rx: Receiver<LoadResult>,
}

impl PendingLoad {
    /// Start `load(&source)` on a new thread. `notify` runs once the worker
    /// is finished, whether it sent a result or unwound.
    pub fn spawn<L, N>(ticket: LoadTicket, source: Source, load: L, notify: N) -> Self
    where
        L: FnOnce(&Source) -> LoadResult + Send + 'static,
        N: FnOnce() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let source_name = source.to_string();

        thread::spawn(move || {
            let _notify = OnDrop(Some(notify));
            // Declared after the guard so the sender drops first
            let tx = tx;
            let result = load(&source);
            if tx.send(result).is_err() {
                debug!("Load: receiver gone, dropping result for {}", source);
            }
        });

        Self { ticket, source_name, rx }
    }

    /// `None` while the worker is still running.
    pub fn poll(&self) -> Option<LoadResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("Load: worker for {} exited without a result", self.source_name);
                Some(Err(LoadError::Interrupted { source_name: self.source_name.clone() }))
            }
        }
    }

    pub fn into_ticket(self) -> LoadTicket {
        self.ticket
    }
}

/// Runs the closure on drop, including during unwinding.
struct OnDrop<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}
