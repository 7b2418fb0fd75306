// src/cli/args.rs
use crate::constants::{DEFAULT_HOSTNAME, DEFAULT_NOTE_NAME};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Zeppelin notebook client; credentials come from GOZEPPELIN_USERNAME and GOZEPPELIN_PASSWORD
/// (ZEPPELIN_USERNAME and ZEPPELIN_PASSWORD are read when those are unset)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Action to perform: list notebooks, or create one from a JSON body piped on stdin
    #[arg(short, long, value_enum, default_value_t = Action::List)]
    pub action: Action,

    /// Zeppelin server host, with optional scheme and port
    #[arg(long, value_name = "HOST", default_value = DEFAULT_HOSTNAME)]
    pub hostname: String,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// List notebooks
    List,
    /// Create a notebook from a JSON request body read on stdin
    NewNote,
}

/// Turn a text file into a Zeppelin new-note request body
#[derive(Parser, Debug)]
#[command(name = "zeppelinfmt", author, version, long_about = None)]
pub struct FmtArgs {
    /// Name of the new note, also used as paragraph title
    #[arg(short, long, default_value = DEFAULT_NOTE_NAME)]
    pub name: String,

    /// Text file to convert; standard input when omitted
    #[arg(short, long, value_name = "FILE")]
    pub filepath: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// HTTP proxy in front of a Zeppelin server
#[derive(Parser, Debug)]
#[command(name = "zeppelinsrv", author, version, long_about = None)]
pub struct ServerArgs {
    /// Port to listen on [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Zeppelin server host [default: localhost]
    #[arg(long, value_name = "HOST")]
    pub hostname: Option<String>,

    /// TOML configuration file; flags take precedence over its values
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the default configuration to FILE and exit
    #[arg(long, value_name = "FILE", conflicts_with = "config")]
    pub write_default_config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
