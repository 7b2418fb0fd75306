// src/infrastructure/zeppelin.rs
use crate::application::batch::{run_sequentially, BatchOutcome};
use crate::application::NotebookRepository;
use crate::constants::{job_path, permissions_path, LOGIN_PATH, NOTEBOOK_PATH};
use crate::domain::{
    ClientError, Credential, ListResponse, NewNoteRequest, Permission, PermissionResponse,
    StandardResponse,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// One cookie-bearing session against a Zeppelin server.
///
/// Each operation logs in again before issuing its request, so the client
/// never has to notice an expired session.
#[derive(Debug)]
pub struct ZeppelinClient {
    http: reqwest::Client,
    base_url: String,
    base: Url,
    credential: Credential,
}

impl ZeppelinClient {
    pub fn new(hostname: &str, credential: Credential) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(hostname);
        let base = Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                url: base_url,
                reason: "cannot carry a path".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(ClientError::Session)?;

        debug!(%base_url, user = %credential.username, "Created Zeppelin client");
        Ok(Self {
            http,
            base_url,
            base,
            credential,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Post the credential as form data; the session cookie lands in the cookie store.
    ///
    /// Rejected credentials are not detected here, only transport failures.
    #[instrument(level = "debug", skip(self), fields(user = %self.credential.username))]
    pub async fn login(&self) -> Result<(), ClientError> {
        let url = self.url(LOGIN_PATH)?;
        let endpoint = url.path().to_string();
        let response = self
            .http
            .post(url)
            .form(&[
                ("userName", self.credential.username.as_str()),
                ("password", self.credential.password.as_str()),
            ])
            .send()
            .await
            .map_err(|source| transport(&endpoint, source))?;

        debug!(status = %response.status(), "Login answered");
        Ok(())
    }

    /// List notebooks and return Zeppelin's reply untouched.
    pub async fn list_notebooks_raw(&self) -> Result<String, ClientError> {
        self.call(Method::GET, self.url(NOTEBOOK_PATH)?, None).await
    }

    /// Create a notebook and return Zeppelin's reply untouched.
    pub async fn create_notebook_raw(&self, note: &NewNoteRequest) -> Result<String, ClientError> {
        let url = self.url(NOTEBOOK_PATH)?;
        let body = encode(url.path(), note)?;
        self.call(Method::POST, url, Some(body)).await
    }

    /// Run each notebook in turn; the first failure ends the batch.
    ///
    /// The returned outcome may be partial: check `failure` before trusting
    /// that every notebook was started.
    pub async fn run_notebooks(
        &self,
        notebook_ids: &[String],
    ) -> BatchOutcome<StandardResponse, ClientError> {
        run_sequentially(notebook_ids, |id| self.run_notebook(id)).await
    }

    async fn call(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<String, ClientError> {
        self.login().await?;

        let endpoint = url.path().to_string();
        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|source| transport(&endpoint, source))?;

        let status = response.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            return Err(ClientError::ServerError { endpoint });
        }

        let text = response
            .text()
            .await
            .map_err(|source| transport(&endpoint, source))?;
        debug!(%method, %endpoint, %status, bytes = text.len(), "Zeppelin answered");
        Ok(text)
    }

    /// Append path segments to the base URL, percent-encoding each one.
    ///
    /// A notebook id is always a single segment: `/`, `?` and `#` inside it
    /// are escaped rather than read as URL structure.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl {
                url: self.base_url.clone(),
                reason: "cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl NotebookRepository for ZeppelinClient {
    #[instrument(level = "debug", skip(self))]
    async fn list_notebooks(&self) -> Result<ListResponse, ClientError> {
        let text = self.list_notebooks_raw().await?;
        let response: ListResponse = decode(&self.url(NOTEBOOK_PATH)?, &text)?;
        info!(count = response.body.len(), "Listed notebooks");
        Ok(response)
    }

    #[instrument(level = "debug", skip(self, note), fields(name = %note.name))]
    async fn create_notebook(&self, note: &NewNoteRequest) -> Result<StandardResponse, ClientError> {
        let text = self.create_notebook_raw(note).await?;
        let response: StandardResponse = decode(&self.url(NOTEBOOK_PATH)?, &text)?;
        info!(note_id = %response.body, "Created notebook");
        Ok(response)
    }

    #[instrument(level = "debug", skip(self))]
    async fn run_notebook(&self, notebook_id: &str) -> Result<StandardResponse, ClientError> {
        let url = self.url(&job_path(notebook_id))?;
        let text = self.call(Method::POST, url.clone(), None).await?;
        decode(&url, &text)
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_note_permission(
        &self,
        notebook_id: &str,
    ) -> Result<PermissionResponse, ClientError> {
        let url = self.url(&permissions_path(notebook_id))?;
        let text = self.call(Method::GET, url.clone(), None).await?;
        decode(&url, &text)
    }

    #[instrument(level = "debug", skip(self, permission))]
    async fn set_note_permission(
        &self,
        notebook_id: &str,
        permission: &Permission,
    ) -> Result<StandardResponse, ClientError> {
        let url = self.url(&permissions_path(notebook_id))?;
        let body = encode(url.path(), permission)?;
        let text = self.call(Method::PUT, url.clone(), Some(body)).await?;
        decode(&url, &text)
    }
}

/// Turn a bare host into a base URL: `http://` is assumed when no scheme is
/// given and trailing slashes are dropped.
pub fn normalize_base_url(hostname: &str) -> String {
    let trimmed = hostname.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

fn transport(endpoint: &str, source: reqwest::Error) -> ClientError {
    ClientError::Transport {
        endpoint: endpoint.to_string(),
        source,
    }
}

fn encode<T: Serialize>(endpoint: &str, value: &T) -> Result<String, ClientError> {
    serde_json::to_string(value).map_err(|source| ClientError::Encode {
        endpoint: endpoint.to_string(),
        source,
    })
}

fn decode<T: DeserializeOwned>(url: &Url, text: &str) -> Result<T, ClientError> {
    serde_json::from_str(text).map_err(|source| ClientError::Decode {
        endpoint: url.path().to_string(),
        source,
    })
}
