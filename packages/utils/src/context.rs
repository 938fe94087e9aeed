use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::{runtime::Runtime, sync::broadcast};
use tracing::instrument;

/// Owns the tokio runtime and the shutdown switch shared by everything the binary spawns
#[derive(Clone)]
pub struct AppContext {
    pub rt: Arc<Runtime>,
    shut_down: Arc<AtomicBool>,
    shutdown_sender: broadcast::Sender<()>,
    // keeps the channel open so sending never fails for lack of receivers
    _shutdown_receiver: Arc<broadcast::Receiver<()>>,
}

impl AppContext {
    pub fn new() -> std::io::Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        Ok(Self::new_with_runtime(Arc::new(rt)))
    }

    pub fn new_with_runtime(rt: Arc<Runtime>) -> Self {
        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);

        Self {
            rt,
            shut_down: Arc::new(AtomicBool::new(false)),
            shutdown_sender,
            _shutdown_receiver: Arc::new(shutdown_receiver),
        }
    }

    /// Resolves once `shutdown()` is called, for graceful shutdown in async code
    #[instrument(level = "debug", skip(self), fields(subsys = "AppContext"))]
    pub fn shutdown_receiver(&self) -> broadcast::Receiver<()> {
        self.shutdown_sender.subscribe()
    }

    /// Typically only called from main (on ctrl-c) or tests
    #[instrument(level = "debug", skip(self), fields(subsys = "AppContext"))]
    pub fn shutdown(&self) {
        // only the first call broadcasts
        if !self.shut_down.swap(true, Ordering::SeqCst) {
            // the held receiver guarantees this cannot fail
            let _ = self.shutdown_sender.send(());
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }
}
