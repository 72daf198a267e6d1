//! Category (genre) records from the remote catalog.

use serde::{Deserialize, Serialize};

/// One category the collection can be filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
}
