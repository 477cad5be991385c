use std::future::Future;
use std::mem;
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::api::ApiError;
use crate::data::Backend;

/// The tri-state every fetch passes through. A screen owns one of these per
/// resource, calls `poll` once a frame, and renders from whatever state it is
/// in. Dropping it drops the channel; a late result dies with it.
pub enum RemoteData<T> {
    Idle,
    Loading(Receiver<Result<T, ApiError>>),
    Ready(T),
    Failed(String),
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T: Send + 'static> RemoteData<T> {
    pub fn spawn<F>(backend: &Backend, task: F) -> Self
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        Self::Loading(backend.fetch(task))
    }

    /// Non-blocking check for a finished fetch. Safe to call in any state.
    pub fn poll(&mut self) {
        if let Self::Loading(rx) = self {
            match rx.try_recv() {
                Ok(Ok(value)) => *self = Self::Ready(value),
                Ok(Err(err)) => *self = Self::Failed(err.to_string()),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    *self = Self::Failed("background task dropped".to_string());
                }
            }
        }
    }

    /// Like `poll`, but swallows a failure into `make_empty()` after logging,
    /// the policy for list fetches, where the user sees "no data" instead of
    /// an error banner.
    pub fn poll_or_empty(&mut self, what: &str, make_empty: impl FnOnce() -> T) {
        self.poll();
        if let Self::Failed(msg) = self {
            log::warn!("Failed to load {what}: {msg}");
            *self = Self::Ready(make_empty());
        }
    }
}

impl<T> RemoteData<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn failed(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Consumes a `Ready` value, leaving `Idle`. Used by one-shot writes.
    pub fn take_ready(&mut self) -> Option<T> {
        if matches!(self, Self::Ready(_)) {
            match mem::take(self) {
                Self::Ready(value) => Some(value),
                _ => unreachable!(),
            }
        } else {
            None
        }
    }

    /// Consumes a `Failed` message, leaving `Idle`.
    pub fn take_failed(&mut self) -> Option<String> {
        if matches!(self, Self::Failed(_)) {
            match mem::take(self) {
                Self::Failed(msg) => Some(msg),
                _ => unreachable!(),
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn poll_transitions_on_result() {
        let (tx, rx) = mpsc::channel();
        let mut data: RemoteData<Vec<u8>> = RemoteData::Loading(rx);
        data.poll();
        assert!(data.is_loading());

        tx.send(Ok(vec![1, 2, 3])).unwrap();
        data.poll();
        assert_eq!(data.ready(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn failed_list_fetch_becomes_empty() {
        let (tx, rx) = mpsc::channel();
        let mut data: RemoteData<Vec<u8>> = RemoteData::Loading(rx);
        tx.send(Err(crate::api::ApiError::Internal(
            "Failed to fetch trades".into(),
        )))
        .unwrap();
        data.poll_or_empty("trades", Vec::new);
        assert_eq!(data.ready(), Some(&Vec::new()));
    }

    #[test]
    fn dropped_sender_is_a_failure() {
        let (tx, rx) = mpsc::channel::<Result<u8, crate::api::ApiError>>();
        drop(tx);
        let mut data = RemoteData::Loading(rx);
        data.poll();
        assert!(data.failed().is_some());
    }
}
