// src/application/notebook_runner.rs
use crate::application::batch::{run_sequentially, BatchOutcome};
use crate::application::NotebookRepository;
use crate::domain::{ClientError, StandardResponse};
use tracing::info;

pub struct NotebookRunner<R: NotebookRepository> {
    repository: R,
}

impl<R: NotebookRepository> NotebookRunner<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Run the notebooks one after another, stopping at the first failure.
    pub async fn run_notebooks(
        &self,
        notebook_ids: &[String],
    ) -> BatchOutcome<StandardResponse, ClientError> {
        info!(count = notebook_ids.len(), "Running notebooks");
        run_sequentially(notebook_ids, |id| self.repository.run_notebook(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockNotebookRepository;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn given_runnable_notebooks_when_running_then_runs_all_in_order() {
        // Arrange
        let runner = NotebookRunner::new(MockNotebookRepository::builder().build());

        // Act
        let outcome = runner.run_notebooks(&ids(&["a", "b", "c"])).await;

        // Assert
        assert!(outcome.is_complete());
        assert_eq!(outcome.completed.len(), 3);
        assert_eq!(runner.repository.calls(), vec!["run:a", "run:b", "run:c"]);
    }

    #[tokio::test]
    async fn given_second_notebook_fails_when_running_then_third_is_never_attempted() {
        // Arrange
        let mock = MockNotebookRepository::builder().with_run_failure("b").build();
        let runner = NotebookRunner::new(mock);

        // Act
        let outcome = runner.run_notebooks(&ids(&["a", "b", "c"])).await;

        // Assert
        assert_eq!(outcome.attempts(), 2);
        assert_eq!(outcome.completed.len(), 1);
        let failure = outcome.failure.expect("Run of b should fail");
        assert_eq!(failure.index, 1);
        assert_eq!(failure.id, "b");
        assert!(failure.error.is_server_error());
        assert_eq!(runner.repository.calls(), vec!["run:a", "run:b"]);
    }
}
