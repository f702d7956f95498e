//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
///
/// Serialized as a bare JSON integer, which is also the form the AI model
/// echoes back in `productIds`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&ProductId::new(42)).unwrap();
        assert_eq!(json, "42");

        let ids: Vec<ProductId> = serde_json::from_str("[1, 7, 7]").unwrap();
        assert_eq!(ids, vec![ProductId::new(1), ProductId::new(7), ProductId::new(7)]);
    }

    #[test]
    fn rejects_non_integer_json() {
        assert!(serde_json::from_str::<ProductId>("\"1\"").is_err());
        assert!(serde_json::from_str::<ProductId>("1.5").is_err());
    }
}
