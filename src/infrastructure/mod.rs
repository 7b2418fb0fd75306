// src/infrastructure/mod.rs
pub mod config;
pub mod session;
pub mod zeppelin;

pub use config::ServerConfig;
pub use session::{session_for, SessionFactory};
pub use zeppelin::ZeppelinClient;
