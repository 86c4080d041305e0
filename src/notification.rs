use std::{error::Error, fmt, sync::Arc};

/// One recorded event from an observed stream.
///
/// Exactly one variant is active per instance and a notification is never
/// mutated after it is recorded. Errors are kept as shared trait objects, the
/// same shape in which observable streams deliver them.
pub enum Notification<T> {
    /// An emitted value.
    Next(T),
    /// Successful completion of the stream.
    Complete,
    /// Stream termination with an error.
    Error(Arc<dyn Error + Send + Sync>),
}

impl<T> Notification<T> {
    #[must_use]
    pub fn is_next(&self) -> bool {
        matches!(self, Notification::Next(_))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Notification::Complete)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}

impl<T> fmt::Display for Notification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Next(_) => write!(f, "next event"),
            Notification::Complete => write!(f, "complete event"),
            Notification::Error(e) => write!(f, "error event ({})", e),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Notification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Next(v) => f.debug_tuple("Next").field(v).finish(),
            Notification::Complete => write!(f, "Complete"),
            Notification::Error(e) => f.debug_tuple("Error").field(e).finish(),
        }
    }
}
