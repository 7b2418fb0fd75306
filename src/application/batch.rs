// src/application/batch.rs
use std::future::Future;
use tracing::{debug, warn};

/// Where a sequential batch stopped.
#[derive(Debug)]
pub struct BatchFailure<E> {
    /// Position of the failing id in the input slice.
    pub index: usize,
    pub id: String,
    pub error: E,
}

/// Result of running one operation per id, stopping at the first failure.
///
/// `completed` holds the responses of every id before the failing one, in
/// input order. Ids after the failure were never attempted.
#[derive(Debug)]
pub struct BatchOutcome<T, E> {
    pub completed: Vec<T>,
    pub failure: Option<BatchFailure<E>>,
}

impl<T, E> BatchOutcome<T, E> {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Number of ids the operation was invoked for, the failing one included.
    pub fn attempts(&self) -> usize {
        self.completed.len() + usize::from(self.failure.is_some())
    }

    pub fn into_result(self) -> Result<Vec<T>, (Vec<T>, BatchFailure<E>)> {
        match self.failure {
            None => Ok(self.completed),
            Some(failure) => Err((self.completed, failure)),
        }
    }
}

pub async fn run_sequentially<'a, T, E, F, Fut>(ids: &'a [String], mut op: F) -> BatchOutcome<T, E>
where
    F: FnMut(&'a str) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut completed = Vec::with_capacity(ids.len());

    for (index, id) in ids.iter().enumerate() {
        debug!(index, id = %id, "Processing batch item");
        match op(id).await {
            Ok(value) => completed.push(value),
            Err(error) => {
                warn!(index, id = %id, %error, "Batch stopped at first failure");
                return BatchOutcome {
                    completed,
                    failure: Some(BatchFailure {
                        index,
                        id: id.clone(),
                        error,
                    }),
                };
            }
        }
    }

    BatchOutcome {
        completed,
        failure: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn given_all_ids_succeed_when_running_then_collects_every_result() {
        // Arrange
        let ids = ids(&["a", "b", "c"]);

        // Act
        let outcome = run_sequentially(&ids, |id| async move {
            Ok::<_, String>(id.to_uppercase())
        })
        .await;

        // Assert
        assert!(outcome.is_complete());
        assert_eq!(outcome.attempts(), 3);
        assert_eq!(outcome.completed, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn given_second_id_fails_when_running_then_stops_and_keeps_partial_results() {
        // Arrange
        let ids = ids(&["a", "b", "c"]);
        let seen = RefCell::new(Vec::new());

        // Act
        let outcome = run_sequentially(&ids, |id| {
            seen.borrow_mut().push(id.to_string());
            async move {
                if id == "b" {
                    Err(format!("{} exploded", id))
                } else {
                    Ok(id.len())
                }
            }
        })
        .await;

        // Assert
        assert_eq!(outcome.completed, vec![1]);
        assert_eq!(outcome.attempts(), 2);
        let failure = outcome.failure.expect("Batch should report failure");
        assert_eq!(failure.index, 1);
        assert_eq!(failure.id, "b");
        assert_eq!(failure.error, "b exploded");
        assert_eq!(*seen.borrow(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn given_no_ids_when_running_then_returns_empty_complete_outcome() {
        let ids: Vec<String> = vec![];

        let outcome = run_sequentially(&ids, |_| async { Ok::<u8, String>(0) }).await;

        assert!(outcome.is_complete());
        assert_eq!(outcome.attempts(), 0);
    }

    #[tokio::test]
    async fn given_failed_outcome_when_converting_then_returns_partial_and_failure() {
        let ids = ids(&["x", "y"]);

        let outcome = run_sequentially(&ids, |id| async move {
            if id == "x" {
                Ok(1)
            } else {
                Err("nope".to_string())
            }
        })
        .await;

        let (partial, failure) = outcome.into_result().expect_err("Should fail on y");
        assert_eq!(partial, vec![1]);
        assert_eq!(failure.id, "y");
    }
}
