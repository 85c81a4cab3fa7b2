use super::message::AppMessage;
use crate::kernel::loader::LoadTicket;
use crate::kernel::services::ports::ViewSource;
use crate::kernel::view_state::ViewFault;
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    source: Arc<dyn ViewSource>,
    load_timeout: Duration,
}

/// Handle to one in-flight view load.
pub struct LoadTask {
    ticket: LoadTicket,
    handle: tokio::task::JoinHandle<()>,
}

impl LoadTask {
    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stops waiting on the source. A blocking source call keeps running,
    /// but its result is never sent.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl AsyncRuntime {
    pub fn new(
        tx: Sender<AppMessage>,
        source: Arc<dyn ViewSource>,
        load_timeout: Duration,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            source,
            load_timeout,
        })
    }

    pub fn load_timeout(&self) -> Duration {
        self.load_timeout
    }

    pub fn load_view(&self, ticket: LoadTicket) -> LoadTask {
        let tx = self.tx.clone();
        let source = Arc::clone(&self.source);
        let timeout = self.load_timeout;

        let handle = self.runtime.spawn(async move {
            let LoadTicket { view, generation } = ticket;
            let job = tokio::task::spawn_blocking(move || source.load(view));

            let result = match tokio::time::timeout(timeout, job).await {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => {
                    let message = if e.is_panic() {
                        "view source panicked".to_string()
                    } else {
                        e.to_string()
                    };
                    Err(ViewFault::LoadFailure { view, message })
                }
                Err(_) => Err(ViewFault::TimedOut {
                    view,
                    after_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                }),
            };

            let _ = tx.send(AppMessage::ViewLoaded {
                generation,
                view,
                result,
            });
        });

        LoadTask { ticket, handle }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime.rs"]
mod tests;
