/// Background sweep scheduler errors.
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("no tokio runtime available to host the sweep task")]
    NoRuntime,

    #[error("sweep task failed: {reason}")]
    TaskFailed { reason: String },
}
