//! Fixed client address lookup.

use crate::activity::ports::GeoLookup;

const LOOPBACK: &str = "127.0.0.1";

/// [`GeoLookup`] that always reports the same address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticGeoLookup {
    address: String,
}

impl StaticGeoLookup {
    /// Creates a lookup reporting `address`.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl Default for StaticGeoLookup {
    fn default() -> Self {
        Self::new(LOOPBACK)
    }
}

impl GeoLookup for StaticGeoLookup {
    fn client_ip_address(&self) -> String {
        self.address.clone()
    }
}
