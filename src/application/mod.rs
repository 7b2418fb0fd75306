// src/application/mod.rs
pub mod admission;
pub mod batch;
pub mod notebook_creator;
pub mod notebook_lister;
pub mod notebook_runner;
pub mod permission_manager;

pub use admission::RunGate;
pub use batch::{BatchFailure, BatchOutcome};
pub use notebook_creator::NotebookCreator;
pub use notebook_lister::{NotebookLister, NotebookRepository};
pub use notebook_runner::NotebookRunner;
pub use permission_manager::PermissionManager;
