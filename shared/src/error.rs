//! Failure kinds for loading the listing collection.

use thiserror::Error;

/// Why the listing collection could not be loaded.
///
/// The `Display` text is what the browse view shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (offline, DNS, aborted...).
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status. The code is kept for logs
    /// only and is not part of the user-facing message.
    #[error("Failed to fetch bikes")]
    Status(u16),
    /// The body was not a `{ "data": [...] }` envelope.
    #[error("Failed to read bike listings: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::FetchError;

    #[test]
    fn status_message_hides_code() {
        let message = FetchError::Status(503).to_string();
        assert_eq!(message, "Failed to fetch bikes");
        assert!(!message.contains("503"));
    }

    #[test]
    fn transport_message_is_passed_through() {
        let err = FetchError::Transport("NetworkError when attempting to fetch resource.".into());
        assert_eq!(err.to_string(), "NetworkError when attempting to fetch resource.");
    }
}
