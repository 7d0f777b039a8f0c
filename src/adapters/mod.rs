//! Adapters connecting the core to the outside world.
//!
//! Each submodule implements one or more ports:
//! - `auth` - session validation (mock validator for tests and local dev)
//! - `client` - outbound REST client used by the list synchronizer
//! - `http` - axum handlers, DTOs, and routes for the inbound API
//! - `motivation` - message generation strategies (static pool, OpenRouter)
//! - `postgres` - sqlx-backed persistence

pub mod auth;
pub mod client;
pub mod http;
pub mod motivation;
pub mod postgres;
