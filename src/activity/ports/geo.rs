//! Client address lookup port.

/// Supplies the address of the client that triggered the current activity.
#[cfg_attr(test, mockall::automock)]
pub trait GeoLookup: Send + Sync {
    /// Returns the client IP address in textual form.
    fn client_ip_address(&self) -> String;
}
