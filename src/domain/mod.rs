//! Domain layer: the category entity, its value objects and the providers
//! used to stamp new entities.

pub mod category;
pub mod clock;
pub mod types;
