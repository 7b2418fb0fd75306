// src/application/notebook_creator.rs
use crate::application::NotebookRepository;
use crate::domain::{ClientError, NewNoteRequest, StandardResponse};

pub struct NotebookCreator<R: NotebookRepository> {
    repository: R,
}

impl<R: NotebookRepository> NotebookCreator<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a notebook; on success the response body holds the new note id.
    pub async fn create_notebook(
        &self,
        note: &NewNoteRequest,
    ) -> Result<StandardResponse, ClientError> {
        self.repository.create_notebook(note).await
    }
}
