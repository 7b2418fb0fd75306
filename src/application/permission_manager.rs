// src/application/permission_manager.rs
use crate::application::batch::{run_sequentially, BatchOutcome};
use crate::application::NotebookRepository;
use crate::domain::{ClientError, Permission, PermissionResponse, StandardResponse};

pub struct PermissionManager<R: NotebookRepository> {
    repository: R,
}

impl<R: NotebookRepository> PermissionManager<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn get_permission(
        &self,
        notebook_id: &str,
    ) -> Result<PermissionResponse, ClientError> {
        self.repository.get_note_permission(notebook_id).await
    }

    /// Apply the same permission to each notebook, stopping at the first failure.
    pub async fn set_permission(
        &self,
        notebook_ids: &[String],
        permission: &Permission,
    ) -> BatchOutcome<StandardResponse, ClientError> {
        run_sequentially(notebook_ids, |id| {
            self.repository.set_note_permission(id, permission)
        })
        .await
    }
}
