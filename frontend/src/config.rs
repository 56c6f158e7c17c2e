//! Build-time configuration for the frontend application.

/// API base URL, read at compile time from `PEDALSWAP_API_BASE`.
/// - Same-origin deployment (default): "/api"
/// - Split deployment: e.g. "https://api.pedalswap.example/api"
pub const API_BASE: &str = match option_env!("PEDALSWAP_API_BASE") {
    Some(url) => url,
    None => "/api",
};

/// Prefix that listing image filenames are served under.
pub const IMAGE_BASE: &str = match option_env!("PEDALSWAP_IMAGE_BASE") {
    Some(base) => base,
    None => "/images/",
};

/// Id of the host-document element the app mounts into.
pub const MOUNT_ID: &str = match option_env!("PEDALSWAP_MOUNT_ID") {
    Some(id) => id,
    None => "app",
};

/// Resolve a listing image filename against [`IMAGE_BASE`].
///
/// The filename is appended as received.
pub fn image_url(filename: &str) -> String {
    format!("{}{}", IMAGE_BASE, filename)
}
