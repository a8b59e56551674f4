//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row plus the input structs its repository accepts.

pub mod comment;
pub mod location_report;
pub mod session;
pub mod user;
pub mod video;
pub mod vote;
