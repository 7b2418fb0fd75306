// src/application/notebook_lister.rs
use crate::domain::{
    ClientError, ListResponse, NewNoteRequest, Notebook, Permission, PermissionResponse,
    StandardResponse,
};
use std::future::Future;

/// Operations a Zeppelin session offers to the use cases.
///
/// Every call is a full round trip; implementations authenticate as needed.
pub trait NotebookRepository {
    fn list_notebooks(&self) -> impl Future<Output = Result<ListResponse, ClientError>> + Send;

    fn create_notebook(
        &self,
        note: &NewNoteRequest,
    ) -> impl Future<Output = Result<StandardResponse, ClientError>> + Send;

    fn run_notebook(
        &self,
        notebook_id: &str,
    ) -> impl Future<Output = Result<StandardResponse, ClientError>> + Send;

    fn get_note_permission(
        &self,
        notebook_id: &str,
    ) -> impl Future<Output = Result<PermissionResponse, ClientError>> + Send;

    fn set_note_permission(
        &self,
        notebook_id: &str,
        permission: &Permission,
    ) -> impl Future<Output = Result<StandardResponse, ClientError>> + Send;
}

pub struct NotebookLister<R: NotebookRepository> {
    repository: R,
}

impl<R: NotebookRepository> NotebookLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List the notebooks visible to the session's user.
    pub async fn list_notebooks(&self) -> Result<Vec<Notebook>, ClientError> {
        Ok(self.repository.list_notebooks().await?.body)
    }
}
