//! StreetAddress entity

use serde::{Deserialize, Serialize};

use crate::repository::Keyed;

/// A persisted (or candidate) street address
///
/// The identifier is assigned by the repository on insert. Create payloads
/// may omit it, in which case it deserializes as `0`. Address fields are
/// opaque to this service and are omitted from JSON output when absent.
///
/// # Example
///
/// ```rust
/// use streetaddresses_api::models::StreetAddress;
///
/// let address = StreetAddress::new().with_street("1 Main St");
/// let json = serde_json::to_value(&address).unwrap();
/// assert_eq!(json, serde_json::json!({"id": 0, "street": "1 Main St"}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct StreetAddress {
    /// Primary key, `>= 1` once persisted
    #[serde(default)]
    pub id: i32,

    /// Street line, e.g. "1 Main St"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// City or locality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State, province or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Postal or ZIP code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl StreetAddress {
    /// Create an empty, unsaved address
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the street line
    #[must_use]
    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    /// Set the city
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the postal code
    #[must_use]
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Set the identifier; used by repositories when persisting
    #[must_use]
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Whether this address carries a persisted identifier
    pub fn is_persisted(&self) -> bool {
        self.id >= 1
    }
}

impl Keyed<i32> for StreetAddress {
    fn key(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_id() {
        let address: StreetAddress = serde_json::from_str(r#"{"street":"2 Oak Ave"}"#).unwrap();
        assert_eq!(address.id, 0);
        assert_eq!(address.street.as_deref(), Some("2 Oak Ave"));
        assert!(address.city.is_none());
        assert!(!address.is_persisted());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let address = StreetAddress::new().with_id(5).with_street("1 Main St");
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json, serde_json::json!({"id": 5, "street": "1 Main St"}));
    }

    #[test]
    fn test_key_is_id() {
        let address = StreetAddress::new().with_id(42).with_city("Springfield");
        assert_eq!(address.key(), 42);
        assert!(address.is_persisted());
    }
}
