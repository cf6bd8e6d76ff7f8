//! Core library exports for the Codeflix catalog.
//!
//! The `data` feature exposes only the domain layer (the category entity and
//! its value objects). The default `service` feature adds the forms, DTOs and
//! service functions used by the catalog application.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "service")]
pub mod dto;
#[cfg(feature = "service")]
pub mod forms;
#[cfg(feature = "service")]
pub mod services;
