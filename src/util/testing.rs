// src/util/testing.rs

use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::env;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NotebookRepository;
use crate::domain::{
    ClientError, ListResponse, NewNoteRequest, Notebook, Permission, PermissionResponse,
    StandardResponse,
};

/// Shared mock repository for testing use cases that depend on NotebookRepository
///
/// Every call is recorded as `"<op>:<argument>"` so tests can assert which
/// round trips happened and in which order.
///
/// # Examples
///
/// ```
/// use zeppelin::util::testing::MockNotebookRepository;
///
/// let mock = MockNotebookRepository::builder()
///     .with_notebook("2A94M5J1Z", "Tutorial")
///     .with_run_failure("2BQA35CJZ")
///     .build();
/// assert!(mock.calls().is_empty());
/// ```
pub struct MockNotebookRepository {
    notebooks: Vec<Notebook>,
    list_fails: bool,
    created_id: String,
    run_failures: HashSet<String>,
    permissions: HashMap<String, Permission>,
    permission_failures: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl MockNotebookRepository {
    pub fn builder() -> MockNotebookRepositoryBuilder {
        MockNotebookRepositoryBuilder::new()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn server_error(endpoint: &str) -> ClientError {
        ClientError::ServerError {
            endpoint: endpoint.to_string(),
        }
    }

    fn ok(body: String) -> StandardResponse {
        StandardResponse {
            status: "OK".to_string(),
            message: None,
            body,
        }
    }
}

impl NotebookRepository for MockNotebookRepository {
    async fn list_notebooks(&self) -> Result<ListResponse, ClientError> {
        self.record("list".to_string());
        if self.list_fails {
            return Err(Self::server_error("/api/notebook"));
        }
        Ok(ListResponse {
            status: "OK".to_string(),
            message: None,
            body: self.notebooks.clone(),
        })
    }

    async fn create_notebook(&self, note: &NewNoteRequest) -> Result<StandardResponse, ClientError> {
        self.record(format!("create:{}", note.name));
        Ok(Self::ok(self.created_id.clone()))
    }

    async fn run_notebook(&self, notebook_id: &str) -> Result<StandardResponse, ClientError> {
        self.record(format!("run:{}", notebook_id));
        if self.run_failures.contains(notebook_id) {
            return Err(Self::server_error(&format!("/api/notebook/job/{}", notebook_id)));
        }
        Ok(Self::ok(String::new()))
    }

    async fn get_note_permission(
        &self,
        notebook_id: &str,
    ) -> Result<PermissionResponse, ClientError> {
        self.record(format!("get:{}", notebook_id));
        if self.permission_failures.contains(notebook_id) {
            return Err(Self::server_error(notebook_id));
        }
        Ok(PermissionResponse {
            status: "OK".to_string(),
            message: None,
            body: self
                .permissions
                .get(notebook_id)
                .cloned()
                .unwrap_or_default(),
        })
    }

    async fn set_note_permission(
        &self,
        notebook_id: &str,
        _permission: &Permission,
    ) -> Result<StandardResponse, ClientError> {
        self.record(format!("set:{}", notebook_id));
        if self.permission_failures.contains(notebook_id) {
            return Err(Self::server_error(notebook_id));
        }
        Ok(Self::ok(String::new()))
    }
}

/// Builder for MockNotebookRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNotebookRepositoryBuilder {
    notebooks: Vec<Notebook>,
    list_fails: bool,
    created_id: String,
    run_failures: HashSet<String>,
    permissions: HashMap<String, Permission>,
    permission_failures: HashSet<String>,
}

impl MockNotebookRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notebooks: vec![],
            list_fails: false,
            created_id: String::new(),
            run_failures: HashSet::new(),
            permissions: HashMap::new(),
            permission_failures: HashSet::new(),
        }
    }

    /// Add a notebook returned by list_notebooks
    pub fn with_notebook(mut self, id: &str, name: &str) -> Self {
        self.notebooks.push(Notebook {
            name: name.to_string(),
            id: id.to_string(),
        });
        self
    }

    /// Make list_notebooks fail as if Zeppelin answered 500
    pub fn with_list_failure(mut self) -> Self {
        self.list_fails = true;
        self
    }

    /// Id returned in the body of create_notebook
    pub fn with_created_id(mut self, id: &str) -> Self {
        self.created_id = id.to_string();
        self
    }

    /// Make run_notebook fail for a specific id
    pub fn with_run_failure(mut self, id: &str) -> Self {
        self.run_failures.insert(id.to_string());
        self
    }

    /// Permission returned by get_note_permission for a specific id
    pub fn with_permission(mut self, id: &str, permission: Permission) -> Self {
        self.permissions.insert(id.to_string(), permission);
        self
    }

    /// Make both permission calls fail for a specific id
    pub fn with_permission_failure(mut self, id: &str) -> Self {
        self.permission_failures.insert(id.to_string());
        self
    }

    pub fn build(self) -> MockNotebookRepository {
        MockNotebookRepository {
            notebooks: self.notebooks,
            list_fails: self.list_fails,
            created_id: self.created_id,
            run_failures: self.run_failures,
            permissions: self.permissions,
            permission_failures: self.permission_failures,
            calls: Mutex::new(vec![]),
        }
    }
}

impl Default for MockNotebookRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "httpmock", "h2", "rustls"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
