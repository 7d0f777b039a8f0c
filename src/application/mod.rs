//! Application layer - one handler per operation.

pub mod handlers;
