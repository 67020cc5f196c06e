pub mod tokio;

pub use self::tokio::{ImmediateTimeService, TokioTimeService};
