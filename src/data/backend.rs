use std::future::Future;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use tokio::runtime::Runtime;

use crate::api::{ApiClient, ApiError};

/// Owns the tokio runtime and the shared API client. Screens hand futures to
/// `fetch` and poll the returned channel from the UI loop; nothing here ever
/// blocks the frame.
pub struct Backend {
    runtime: Runtime,
    client: Arc<ApiClient>,
}

impl Backend {
    pub fn new(client: ApiClient) -> Self {
        let runtime = Runtime::new().expect("Failed to create runtime");
        Self {
            runtime,
            client: Arc::new(client),
        }
    }

    /// Handle for building request futures to pass back into `fetch`.
    pub fn client(&self) -> Arc<ApiClient> {
        Arc::clone(&self.client)
    }

    /// Runs `task` on the runtime; the result arrives on the receiver. If the
    /// caller drops the receiver first, the send just fails silently; there is
    /// no other cancellation.
    pub fn fetch<T, F>(&self, task: F) -> Receiver<Result<T, ApiError>>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        self.runtime.spawn(async move {
            let _ = tx.send(task.await);
        });
        rx
    }
}
