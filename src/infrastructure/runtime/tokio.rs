use crate::domain::ports::time_service::TimeService;
use async_trait::async_trait;
use std::time::Duration;

/// Real delays on the tokio timer.
#[derive(Clone, Default)]
pub struct TokioTimeService;

impl TokioTimeService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TimeService for TokioTimeService {
    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Skips every simulated delay.
#[derive(Clone, Default)]
pub struct ImmediateTimeService;

impl ImmediateTimeService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TimeService for ImmediateTimeService {
    async fn sleep(&self, _duration: Duration) {}
}
