//! Scheduling error taxonomy.

use std::collections::TryReserveError;

use thiserror::Error;

/// Terminal failures of a scheduling run.
///
/// No retry is attempted internally; the caller decides whether to retry
/// with adjusted inputs. After an error the output buffer's contents are
/// unspecified.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The batch or configuration cannot be scheduled as given.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The order buffer could not be allocated.
    #[error("out of resources: {0}")]
    OutOfResources(#[from] TryReserveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ScheduleError::InvalidArgument("duplicate ids".into());
        assert_eq!(err.to_string(), "invalid argument: duplicate ids");
    }
}
