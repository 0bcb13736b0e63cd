//! Interface naming convention.

/// Marker placed in front of every interface name.
pub const INTERFACE_MARKER: &str = "I";

/// Output interface name for a host record: marker, prefix, then the host name.
pub fn interface_name(prefix: &str, record: &str) -> String {
    format!("{}{}{}", INTERFACE_MARKER, prefix, record)
}
