//! Outbound REST client adapters.

mod rest;

pub use rest::RestStatusUpdater;
