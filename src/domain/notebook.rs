// src/domain/notebook.rs
use serde::{Deserialize, Serialize};

/// Minimal view of a notebook as returned by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
}

/// The `{status, message, body}` envelope Zeppelin wraps every reply in.
///
/// `status` is carried through untouched; callers decide what a non-"OK"
/// status means. Zeppelin omits `body` on some endpoints (job runs,
/// permission updates), in which case it decodes to `T::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub body: T,
}

pub type StandardResponse = ApiResponse<String>;
pub type ListResponse = ApiResponse<Vec<Notebook>>;
