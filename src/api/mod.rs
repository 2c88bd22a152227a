//! HTTP surface of the service.
//!
//! Exposes the insight pipeline as two endpoints: `POST /predict` and
//! `GET /health`. The router is composable: `api_router()` returns a
//! `Router` that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{serve, start_server_on, ApiServer, ApiSession};
pub use types::ApiContext;
