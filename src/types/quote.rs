//! Quote types
//!
//! Defines the quote record served by the backend API.

use serde::{Deserialize, Serialize};

/// A single quote as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Server-assigned identifier, unique within a fetched set
    pub id: i64,
    /// The quote text
    pub text: String,
    /// Attributed author
    pub author: String,
    /// Category the quote is filed under
    pub category: String,
}
