//! Test helper utilities for client integration tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Semaphore;

use client::{ClientError, ClientResult, NotificationApi};

/// Error returned by the fakes for a failed remote call
pub fn network_error() -> ClientError {
    ClientError::Http {
        message: "connection reset".to_string(),
    }
}

/// Helper to wait for async conditions with timeout
pub async fn wait_for_condition<F, Fut>(mut condition: F, timeout_ms: u64) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    let start = std::time::Instant::now();
    let timeout = Duration::from_millis(timeout_ms);

    loop {
        if condition().await {
            return true;
        }

        if start.elapsed() > timeout {
            return false;
        }

        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

struct GateInner {
    snapshots: Mutex<VecDeque<Vec<Value>>>,
    calls: Mutex<Vec<String>>,
    gate: Semaphore,
    gated: bool,
    failing: AtomicBool,
}

/// Notification API fake whose calls can be held open until released
///
/// Every call is logged as `op` or `op:arg` before it blocks on the gate, so a
/// test can observe the store while the call is still in flight.
#[derive(Clone)]
pub struct GatedApi {
    inner: Arc<GateInner>,
}

impl GatedApi {
    /// Calls block until `release` is called
    pub fn gated(snapshots: Vec<Vec<Value>>) -> Self {
        Self::build(snapshots, true)
    }

    /// Calls settle immediately
    pub fn open(snapshots: Vec<Vec<Value>>) -> Self {
        Self::build(snapshots, false)
    }

    fn build(snapshots: Vec<Vec<Value>>, gated: bool) -> Self {
        Self {
            inner: Arc::new(GateInner {
                snapshots: Mutex::new(snapshots.into()),
                calls: Mutex::new(Vec::new()),
                gate: Semaphore::new(0),
                gated,
                failing: AtomicBool::new(false),
            }),
        }
    }

    /// Make every call from now on fail after the gate
    pub fn fail_calls(&self, failing: bool) {
        self.inner.failing.store(failing, Ordering::SeqCst);
    }

    /// Let `n` held calls settle
    pub fn release(&self, n: usize) {
        self.inner.gate.add_permits(n);
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub async fn wait_for_calls(&self, n: usize) -> bool {
        wait_for_condition(|| async { self.calls().len() >= n }, 1_000).await
    }

    async fn pass(&self, call: String) -> ClientResult<()> {
        self.inner.calls.lock().unwrap().push(call);
        if self.inner.gated {
            self.inner.gate.acquire().await.unwrap().forget();
        }
        if self.inner.failing.load(Ordering::SeqCst) {
            return Err(network_error());
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationApi for GatedApi {
    async fn fetch_notifications(&self) -> ClientResult<Vec<Value>> {
        self.pass("fetch".to_string()).await?;
        let mut snapshots = self.inner.snapshots.lock().unwrap();
        // The last snapshot keeps being served once the queue runs dry
        if snapshots.len() > 1 {
            Ok(snapshots.pop_front().unwrap_or_default())
        } else {
            Ok(snapshots.front().cloned().unwrap_or_default())
        }
    }

    async fn mark_read(&self, id: &str) -> ClientResult<()> {
        self.pass(format!("mark_read:{id}")).await
    }

    async fn mark_all_read(&self, ids: &[String]) -> ClientResult<()> {
        self.pass(format!("mark_all_read:{}", ids.join(","))).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.pass(format!("delete:{id}")).await
    }
}
