#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TriageError {
    /// Attendance was requested while nobody is waiting. An expected,
    /// recoverable outcome rather than a fault.
    #[error("no patients waiting")]
    EmptyWaitingSet,
    /// Undo was requested while the attendance history is empty.
    #[error("no attendance to undo")]
    EmptyHistory,
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;
