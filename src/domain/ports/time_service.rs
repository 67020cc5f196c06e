use async_trait::async_trait;
use std::time::Duration;

/// Source of simulated network latency. Tests swap in an implementation
/// that returns immediately.
#[async_trait]
pub trait TimeService: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
