//! Shared response envelope.
//!
//! Resource endpoints answer with `{ "data": ... }`; auth endpoints return
//! their token payload unwrapped.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
