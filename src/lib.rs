//! JobHop - Job Application Tracking Backend
//!
//! This crate implements the JobHop API: owner-scoped job-application
//! records, per-status statistics, and an idempotent daily motivational
//! message backed by a pluggable generation strategy.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod sync;
