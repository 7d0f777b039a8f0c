//! Operation handlers, grouped by area.

pub mod applications;
pub mod motivation;
