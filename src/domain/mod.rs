// src/domain/mod.rs
pub mod credential;
pub mod error;
pub mod note;
pub mod notebook;
pub mod permission;

pub use credential::Credential;
pub use error::{ClientError, DomainError};
pub use note::{NewNoteRequest, Paragraph};
pub use notebook::{ApiResponse, ListResponse, Notebook, StandardResponse};
pub use permission::{Permission, PermissionResponse};
