//! Quote entity.

use serde::{Deserialize, Serialize};

/// A stored quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique id assigned by the store; never reused within a process
    pub id: u64,
    /// Quotation text, always non-empty
    pub text: String,
}
