// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::cli::args::{Action, Args, FmtArgs, ServerArgs};
use crate::domain::{Credential, DomainError, NewNoteRequest};
use crate::infrastructure::{ServerConfig, ZeppelinClient};
use anyhow::{Context, Result};
use std::io::{IsTerminal, Read};
use std::path::Path;
use tracing::{debug, info};

/// Entry point of the `zeppelin` CLI: perform one action and print Zeppelin's raw reply.
pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting zeppelin with arguments");

    info!("Retrieving credentials from environment variables");
    let credential = Credential::from_env().context("Could not read Zeppelin credentials")?;

    let client = ZeppelinClient::new(&args.hostname, credential)
        .context("Could not create Zeppelin client")?;

    info!(action = ?args.action, base_url = %client.base_url(), "Performing action");
    let body = match args.action {
        Action::List => client.list_notebooks_raw().await?,
        Action::NewNote => {
            let note = read_piped_note()?;
            client.create_notebook_raw(&note).await?
        }
    };

    println!("{}", body);
    Ok(())
}

/// Read a JSON new-note request from standard input, which must be piped in.
pub fn read_piped_note() -> Result<NewNoteRequest> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(DomainError::StdinNotPiped.into());
    }

    let mut input = String::new();
    stdin
        .lock()
        .read_to_string(&mut input)
        .context("Could not read from stdin")?;

    parse_new_note(&input)
}

pub fn parse_new_note(input: &str) -> Result<NewNoteRequest> {
    serde_json::from_str(input)
        .map_err(|e| DomainError::InvalidInput(format!("not a new-note request: {}", e)))
        .context("Could not parse input")
}

/// Entry point of `zeppelinfmt`: the new-note request body as indented JSON.
pub fn format_note(args: &FmtArgs) -> Result<String> {
    let content = read_input(args.filepath.as_deref())?;
    debug!(bytes = content.len(), name = %args.name, "Formatting note");

    let note = util::text::text_to_new_note(&args.name, &args.name, &content);
    serde_json::to_string_pretty(&note).context("Could not encode note")
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut input)
                .context("Could not read from stdin")?;
            Ok(input)
        }
    }
}

/// Entry point of `zeppelinsrv`: resolve configuration, then serve.
///
/// With `--write-default-config` only the configuration file is written.
pub async fn serve(args: ServerArgs) -> Result<()> {
    debug!(?args, "Starting zeppelinsrv with arguments");
    if let Some(path) = &args.write_default_config {
        write_default_config(path)?;
        return Ok(());
    }

    let config = server_config(&args)?;
    ports::serve(config).await
}

pub fn write_default_config(path: &Path) -> Result<ServerConfig> {
    let config = ServerConfig::create_default(path)
        .with_context(|| format!("Could not write default configuration to {}", path.display()))?;
    info!(path = %path.display(), "Wrote default server configuration");
    Ok(config)
}

pub fn server_config(args: &ServerArgs) -> Result<ServerConfig> {
    let base = match &args.config {
        Some(path) => {
            debug!(?path, "Loading server configuration");
            ServerConfig::load(path)?
        }
        None => ServerConfig::default(),
    };
    Ok(base.with_overrides(args.hostname.clone(), args.port))
}
