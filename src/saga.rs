//! Ordered multi-step writes with reverse-order compensation.
//!
//! A [`Saga`] runs its steps in order against a shared context. When a step
//! fails, the steps that already completed are compensated newest first and
//! the failure is returned together with any compensation errors. Nothing is
//! transactional; a compensation that fails leaves its write in place.

use async_trait::async_trait;
use thiserror::Error;

/// One forward action and its optional undo.
#[async_trait]
pub trait SagaStep<Ctx, E>: Send + Sync
where
    Ctx: Send,
{
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Performs the step.
    ///
    /// # Errors
    ///
    /// Returns the step's error; later steps are skipped.
    async fn execute(&self, context: &mut Ctx) -> Result<(), E>;

    /// Undoes a completed step. The default does nothing.
    ///
    /// # Errors
    ///
    /// Returns the compensation error; remaining compensations still run.
    async fn compensate(&self, _context: &mut Ctx) -> Result<(), E> {
        Ok(())
    }
}

/// A compensation that did not succeed.
#[derive(Debug)]
pub struct CompensationFailure<E> {
    /// Step whose compensation failed.
    pub step: String,
    /// Compensation error.
    pub error: E,
}

/// Failure of a saga run.
#[derive(Debug, Error)]
#[error("step '{step}' failed: {source}")]
pub struct SagaError<E>
where
    E: std::error::Error + 'static,
{
    /// Step that failed.
    pub step: String,
    /// Forward error.
    #[source]
    pub source: E,
    /// Compensations that failed, in the order they ran.
    pub compensation_failures: Vec<CompensationFailure<E>>,
}

impl<E> SagaError<E>
where
    E: std::error::Error + 'static,
{
    /// Returns `true` when every completed step was undone.
    #[must_use]
    pub fn fully_compensated(&self) -> bool {
        self.compensation_failures.is_empty()
    }
}

/// Ordered list of steps sharing a context.
pub struct Saga<Ctx, E>
where
    Ctx: Send,
{
    name: String,
    steps: Vec<Box<dyn SagaStep<Ctx, E>>>,
}

impl<Ctx, E> Saga<Ctx, E>
where
    Ctx: Send,
    E: std::error::Error + Send + 'static,
{
    /// Creates an empty saga.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a step.
    #[must_use]
    pub fn step(mut self, step: impl SagaStep<Ctx, E> + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` when the saga has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step in order.
    ///
    /// # Errors
    ///
    /// Returns [`SagaError`] naming the first failed step after compensating
    /// the completed ones in reverse order.
    pub async fn run(&self, context: &mut Ctx) -> Result<(), SagaError<E>> {
        for (completed, step) in self.steps.iter().enumerate() {
            if let Err(source) = step.execute(context).await {
                tracing::warn!(
                    saga = %self.name,
                    step = step.name(),
                    error = %source,
                    "saga step failed, compensating"
                );
                let compensation_failures = self.compensate(completed, context).await;
                return Err(SagaError {
                    step: step.name().to_owned(),
                    source,
                    compensation_failures,
                });
            }
        }
        tracing::debug!(saga = %self.name, steps = self.steps.len(), "saga completed");
        Ok(())
    }

    async fn compensate(&self, completed: usize, context: &mut Ctx) -> Vec<CompensationFailure<E>> {
        let mut failures = Vec::new();
        for step in self.steps.iter().take(completed).rev() {
            if let Err(error) = step.compensate(context).await {
                tracing::error!(
                    saga = %self.name,
                    step = step.name(),
                    error = %error,
                    "compensation failed"
                );
                failures.push(CompensationFailure {
                    step: step.name().to_owned(),
                    error,
                });
            }
        }
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::{Saga, SagaStep};
    use async_trait::async_trait;
    use rstest::rstest;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq, Eq)]
    #[error("{0}")]
    struct StepFailed(&'static str);

    #[derive(Default)]
    struct Journal {
        entries: Vec<String>,
    }

    struct Recorded {
        name: &'static str,
        fails: bool,
        undo_fails: bool,
    }

    impl Recorded {
        const fn ok(name: &'static str) -> Self {
            Self {
                name,
                fails: false,
                undo_fails: false,
            }
        }

        const fn failing(name: &'static str) -> Self {
            Self {
                name,
                fails: true,
                undo_fails: false,
            }
        }

        const fn stubborn(name: &'static str) -> Self {
            Self {
                name,
                fails: false,
                undo_fails: true,
            }
        }
    }

    #[async_trait]
    impl SagaStep<Journal, StepFailed> for Recorded {
        fn name(&self) -> &str {
            self.name
        }

        async fn execute(&self, context: &mut Journal) -> Result<(), StepFailed> {
            if self.fails {
                return Err(StepFailed(self.name));
            }
            context.entries.push(format!("do {}", self.name));
            Ok(())
        }

        async fn compensate(&self, context: &mut Journal) -> Result<(), StepFailed> {
            if self.undo_fails {
                return Err(StepFailed(self.name));
            }
            context.entries.push(format!("undo {}", self.name));
            Ok(())
        }
    }

    #[rstest]
    #[tokio::test]
    async fn runs_all_steps_in_order() {
        let saga = Saga::new("happy")
            .step(Recorded::ok("a"))
            .step(Recorded::ok("b"));
        let mut journal = Journal::default();

        saga.run(&mut journal).await.expect("saga should succeed");

        assert_eq!(journal.entries, vec!["do a", "do b"]);
    }

    #[rstest]
    #[tokio::test]
    async fn failure_compensates_completed_steps_in_reverse() {
        let saga = Saga::new("rollback")
            .step(Recorded::ok("a"))
            .step(Recorded::ok("b"))
            .step(Recorded::failing("c"))
            .step(Recorded::ok("d"));
        let mut journal = Journal::default();

        let err = saga.run(&mut journal).await.expect_err("saga should fail");

        assert_eq!(err.step, "c");
        assert_eq!(err.source, StepFailed("c"));
        assert!(err.fully_compensated());
        assert_eq!(journal.entries, vec!["do a", "do b", "undo b", "undo a"]);
    }

    #[rstest]
    #[tokio::test]
    async fn failed_compensation_is_reported_and_the_rest_still_run() {
        let saga = Saga::new("partial")
            .step(Recorded::ok("a"))
            .step(Recorded::stubborn("b"))
            .step(Recorded::failing("c"));
        let mut journal = Journal::default();

        let err = saga.run(&mut journal).await.expect_err("saga should fail");

        assert_eq!(err.compensation_failures.len(), 1);
        assert_eq!(
            err.compensation_failures.first().map(|failure| failure.step.as_str()),
            Some("b")
        );
        assert_eq!(journal.entries, vec!["do a", "do b", "undo a"]);
    }
}
