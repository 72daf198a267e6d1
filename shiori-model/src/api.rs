//! Wire envelope used by every collection endpoint.

use serde::{Deserialize, Serialize};

/// Response envelope: `{ "data": ... }`.
///
/// Responses are parsed strictly into this shape at the fetch boundary; a
/// missing or mis-shaped `data` field surfaces as a decode error instead of
/// loosely-shaped data flowing inward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}
