// src/domain/note.rs
use serde::{Deserialize, Serialize};

/// Request body for creating a notebook, as documented in
/// <https://zeppelin.apache.org/docs/latest/rest-api/rest-notebook.html#create-a-new-note>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNoteRequest {
    pub name: String,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}
