//! BullyGuard Server
//!
//! Route handlers, shared state, and the dashboard store behind the
//! `bullyguard-server` binary.

pub mod batch;
pub mod cli;
pub mod config;
pub mod routes;
pub mod state;
pub mod store;

pub use cli::Cli;
pub use config::ServerConfig;
pub use state::AppState;
pub use store::DashboardStore;
