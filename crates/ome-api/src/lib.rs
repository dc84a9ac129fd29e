// ome-api: Async Rust client for the OpenManage Enterprise template APIs

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod templates;
pub mod transport;

pub use auth::Credentials;
pub use client::OmeClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
