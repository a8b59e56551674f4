//! Domain logic for the roadclips dashcam map.
//!
//! Everything in this crate is pure: no database, no HTTP, no filesystem.
//! The `db` and `api` crates build on these types and rules.

pub mod error;
pub mod geo;
pub mod moderation;
pub mod pagination;
pub mod roles;
pub mod scoring;
pub mod slug;
pub mod submission;
pub mod types;
pub mod upload;
pub mod youtube;
