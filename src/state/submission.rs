//! Per-form submission lifecycle state machine

use std::time::{Duration, Instant};

/// Default delay before a success banner clears back to idle
pub const DEFAULT_SUCCESS_RESET: Duration = Duration::from_secs(5);

/// Lifecycle of one submission attempt.
///
/// Closed sum type so "success and error simultaneously" cannot exist.
/// Every attempt ends in `Success` or `Error`; `Idle` is only re-entered
/// via the timed reset after `Success`, never automatically after
/// `Error` (the user keeps their input and retries).
#[derive(Debug, Clone, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success {
        message: String,
        at: Instant,
    },
    Error {
        message: String,
    },
}

/// Submission controller owned by exactly one form instance.
///
/// The `begin` guard is the concurrency control: while `Submitting`,
/// another submit attempt is refused, which keeps at most one request
/// in flight per form without any lock.
#[derive(Debug, Clone)]
pub struct Submission {
    pub status: SubmissionStatus,
    reset_after: Duration,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new(DEFAULT_SUCCESS_RESET)
    }
}

impl Submission {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            status: SubmissionStatus::Idle,
            reset_after,
        }
    }

    /// Enter `Submitting`. Refused (returns false) while a previous
    /// attempt is still in flight.
    pub fn begin(&mut self) -> bool {
        if matches!(self.status, SubmissionStatus::Submitting) {
            return false;
        }
        self.status = SubmissionStatus::Submitting;
        true
    }

    /// Terminal state for a successful attempt
    pub fn succeed(&mut self, message: impl Into<String>) {
        self.status = SubmissionStatus::Success {
            message: message.into(),
            at: Instant::now(),
        };
    }

    /// Terminal state for a failed attempt; persists until resubmit
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = SubmissionStatus::Error {
            message: message.into(),
        };
    }

    /// Advance time-based transitions. Called from the event loop each
    /// poll cycle; only `Success` expires back to `Idle`.
    pub fn tick(&mut self) {
        if let SubmissionStatus::Success { at, .. } = &self.status {
            if at.elapsed() >= self.reset_after {
                self.status = SubmissionStatus::Idle;
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.status, SubmissionStatus::Idle)
    }

    /// Banner message for the current terminal state, if any
    pub fn message(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Success { message, .. } | SubmissionStatus::Error { message } => {
                Some(message)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let submission = Submission::default();
        assert!(submission.is_idle());
        assert!(submission.message().is_none());
    }

    #[test]
    fn test_begin_from_idle() {
        let mut submission = Submission::default();
        assert!(submission.begin());
        assert!(submission.is_submitting());
    }

    #[test]
    fn test_begin_refused_while_submitting() {
        let mut submission = Submission::default();
        assert!(submission.begin());
        assert!(!submission.begin());
        assert!(submission.is_submitting());
    }

    #[test]
    fn test_begin_allowed_from_error() {
        let mut submission = Submission::default();
        submission.begin();
        submission.fail("Erro ao enviar mensagem. Tente novamente.");
        assert!(submission.begin());
    }

    #[test]
    fn test_succeed_records_message() {
        let mut submission = Submission::default();
        submission.begin();
        submission.succeed("Mensagem enviada com sucesso!");
        assert_eq!(submission.message(), Some("Mensagem enviada com sucesso!"));
        assert!(!submission.is_submitting());
    }

    #[test]
    fn test_success_resets_to_idle_after_delay() {
        let mut submission = Submission::new(Duration::from_secs(5));
        submission.begin();
        submission.status = SubmissionStatus::Success {
            message: "ok".to_string(),
            at: Instant::now() - Duration::from_secs(6),
        };
        submission.tick();
        assert!(submission.is_idle());
    }

    #[test]
    fn test_success_persists_before_delay() {
        let mut submission = Submission::new(Duration::from_secs(5));
        submission.begin();
        submission.succeed("ok");
        submission.tick();
        assert!(matches!(
            submission.status,
            SubmissionStatus::Success { .. }
        ));
    }

    #[test]
    fn test_error_never_auto_resets() {
        let mut submission = Submission::new(Duration::from_millis(0));
        submission.begin();
        submission.fail("Erro ao enviar mensagem. Tente novamente.");
        submission.tick();
        assert!(matches!(submission.status, SubmissionStatus::Error { .. }));
    }

    #[test]
    fn test_tick_on_idle_is_noop() {
        let mut submission = Submission::default();
        submission.tick();
        assert!(submission.is_idle());
    }
}
