use crate::{
    application::services::enrollment_service::EnrollmentService, config::LatencyConfig,
    domain::ports::time_service::TimeService,
};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

const SESSION_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SESSION_ID_LEN: usize = 13;

/// Outcome of a successful simulated checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub session_id: String,
    pub course_id: String,
    pub redirect: String,
}

/// Simulated payment gateway in front of enrollment.
#[derive(Clone)]
pub struct CheckoutService {
    enrollment_service: EnrollmentService,
    time: Arc<dyn TimeService>,
    latency: LatencyConfig,
}

impl CheckoutService {
    pub fn new(
        enrollment_service: EnrollmentService,
        time: Arc<dyn TimeService>,
        latency: LatencyConfig,
    ) -> Self {
        Self {
            enrollment_service,
            time,
            latency,
        }
    }

    /// Simulate the payment round trip, then enroll.
    ///
    /// Every failure collapses to `false`; callers can only retry.
    pub async fn process_payment(&self, user_id: &str, course_id: &str) -> bool {
        self.time.sleep(self.latency.payment).await;

        match self.enrollment_service.enroll(user_id, course_id).await {
            Ok(_) => true,
            Err(e) => {
                metrics::counter!("payments_failed_total").increment(1);
                tracing::warn!(user_id, course_id, "Payment did not complete: {}", e);
                false
            }
        }
    }

    /// Open a simulated checkout session and process it.
    pub async fn checkout(&self, user_id: &str, course_id: &str) -> Option<CheckoutReceipt> {
        let session_id = simulated_session_id();
        tracing::info!(user_id, course_id, session_id = %session_id, "Processing checkout");

        if !self.process_payment(user_id, course_id).await {
            return None;
        }

        Some(CheckoutReceipt {
            session_id,
            course_id: course_id.to_string(),
            redirect: format!("/courses/{}/learn", course_id),
        })
    }
}

/// `sim_` followed by random base-36 characters
pub fn simulated_session_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SESSION_ID_LEN)
        .map(|_| SESSION_ID_ALPHABET[rng.gen_range(0..SESSION_ID_ALPHABET.len())] as char)
        .collect();
    format!("sim_{}", suffix)
}
