//! A fetch running in the background, polled from a synchronous loop.

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::Resource;
use crate::data::Sample;
use crate::error::LoadError;

/// Handle to a resource load spawned onto the tokio runtime.
///
/// The terminal UI cannot block on the fetch, so it calls [`poll`](Self::poll)
/// once per frame until the result arrives.
#[derive(Debug)]
pub struct PendingLoad {
    receiver: Option<oneshot::Receiver<Result<Vec<Sample>, LoadError>>>,
    description: String,
    handle: JoinHandle<()>,
}

impl PendingLoad {
    /// Start loading `resource` on the given runtime.
    pub fn spawn(runtime: &tokio::runtime::Handle, resource: Resource) -> Self {
        let (tx, rx) = oneshot::channel();
        let description = resource.description();
        let handle = runtime.spawn(async move {
            let result = resource.load().await;
            // Receiver gone means the viewer moved on.
            let _ = tx.send(result);
        });
        Self {
            receiver: Some(rx),
            description,
            handle,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the result once, when it is ready.
    pub fn poll(&mut self) -> Option<Result<Vec<Sample>, LoadError>> {
        let receiver = self.receiver.as_mut()?;
        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                Some(result)
            }
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.receiver = None;
                Some(Err(LoadError::Task {
                    resource: self.description.clone(),
                    message: "fetch task ended without a result".to_string(),
                }))
            }
        }
    }

    /// True once [`poll`](Self::poll) has handed out the result.
    pub fn is_finished(&self) -> bool {
        self.receiver.is_none()
    }
}

impl Drop for PendingLoad {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
