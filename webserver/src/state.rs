//! Webserver state shared by every handler

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::traits::DocumentStore;

/// Process-level server state
#[derive(Debug)]
pub struct WebServerState {
    pub bind_address: SocketAddr,
    pub server_start_time: Instant,
    is_running: AtomicBool,
}

impl WebServerState {
    pub fn new(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            server_start_time: Instant::now(),
            is_running: AtomicBool::new(true),
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}

/// Router state: the document store plus the server state
pub struct AppState<D: DocumentStore> {
    pub store: Arc<D>,
    pub server: Arc<WebServerState>,
}

impl<D: DocumentStore> AppState<D> {
    pub fn new(store: Arc<D>, server: Arc<WebServerState>) -> Self {
        Self { store, server }
    }
}

impl<D: DocumentStore> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            server: self.server.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_flag() {
        let state = WebServerState::new("127.0.0.1:5000".parse().unwrap());

        assert!(state.is_running());
        state.set_running(false);
        assert!(!state.is_running());
        assert_eq!(state.uptime_seconds(), 0);
    }
}
