//! Domain layer - entities, value objects, and domain errors.

pub mod applications;
pub mod foundation;
pub mod motivation;
