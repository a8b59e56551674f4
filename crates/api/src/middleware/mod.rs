//! Session extractors.
//!
//! - [`auth::AuthUser`] -- a valid Bearer access token is required (401 otherwise).
//! - [`auth::MaybeAuthUser`] -- the session is optional, for public reads.
//! - [`rbac::RequireAdmin`] -- the `admin` role is required (403 otherwise).

pub mod auth;
pub mod rbac;
