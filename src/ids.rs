//! Newtype ID for catalog products.
//!
//! Carts reference catalog products through `ProductId` handles rather
//! than holding product references directly; the catalog remains the
//! single owner of product data and stock.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle identifying a product in the catalog.
///
/// The product name is the unique catalog key, so the id wraps it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an ID from a product name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("Widget");
        assert_eq!(id.as_str(), "Widget");
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("Widget");
        assert_eq!(format!("{}", id), "Widget");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new("same"), ProductId::new("same"));
        assert_ne!(ProductId::new("same"), ProductId::new("different"));
    }

    #[test]
    fn test_id_conversions() {
        let id: ProductId = "Widget".into();
        assert_eq!(id.as_ref(), "Widget");
        assert_eq!(ProductId::from("Widget".to_string()), id);
        assert_eq!(id.into_inner(), "Widget");
    }
}
