//! Core server components

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::{build_app, build_router, Server};
pub use state::ServerState;
