use serde::{Deserialize, Serialize};

/// Opaque identifier for the user owning a basket.
/// Buyer identity is managed by the external identity provider; this
/// service never resolves it against a user table of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuyerId(String);

impl BuyerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BuyerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BuyerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BuyerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
