// src/ports/mod.rs
pub mod proxy;

pub use proxy::{create_router, serve, AppState};
