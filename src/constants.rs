// src/constants.rs
//
// Application-wide constants: environment variable names, Zeppelin endpoints
// and the proxy server's fixed messages and timings.

/// Environment variable holding the Zeppelin user name for the CLI.
pub const ENV_USERNAME: &str = "GOZEPPELIN_USERNAME";

/// Environment variable holding the Zeppelin password for the CLI.
pub const ENV_PASSWORD: &str = "GOZEPPELIN_PASSWORD";

/// Read when `ENV_USERNAME` is unset or empty.
pub const ENV_USERNAME_FALLBACK: &str = "ZEPPELIN_USERNAME";

/// Read when `ENV_PASSWORD` is unset or empty.
pub const ENV_PASSWORD_FALLBACK: &str = "ZEPPELIN_PASSWORD";

/// Path segments of the login endpoint, appended to the base URL.
pub const LOGIN_PATH: &[&str] = &["api", "login"];

/// Path segments of the notebook collection endpoint.
pub const NOTEBOOK_PATH: &[&str] = &["api", "notebook"];

/// Default Zeppelin host used by every front-end.
pub const DEFAULT_HOSTNAME: &str = "localhost";

/// Default port the proxy server listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// How long a `/run` request holds the admission slot.
///
/// The slot is released when this elapses, whether or not the notebooks have
/// finished running.
pub const RUN_WINDOW_SECS: u64 = 10 * 60;

/// Blanket deadline applied to every proxy request.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

pub const BUSY_MESSAGE: &str = "computation still going on, try again later ;)";
pub const UNAVAILABLE_MESSAGE: &str = "server not available for now, try later ;)";

/// Paragraph title and note name used by the formatter when none is given.
pub const DEFAULT_NOTE_NAME: &str = "new note";

/// Segments of `/api/notebook/{id}/permissions`; the id is one segment, never split.
pub fn permissions_path(notebook_id: &str) -> [&str; 4] {
    ["api", "notebook", notebook_id, "permissions"]
}

/// Segments of `/api/notebook/job/{id}`.
pub fn job_path(notebook_id: &str) -> [&str; 4] {
    ["api", "notebook", "job", notebook_id]
}
