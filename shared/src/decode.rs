//! Decoding of the `GET /api/bikes` response body.

use serde::Deserialize;

use crate::{FetchError, Listing};

#[derive(Debug, Deserialize)]
struct ListingsEnvelope {
    #[serde(default)]
    data: Option<Vec<Listing>>,
}

/// Parse a `{ "data": [...] }` body into listings, preserving order.
///
/// A missing or `null` `data` field yields an empty collection rather than an
/// error; it is logged so it can be told apart from a genuinely empty
/// marketplace. Anything that is not an envelope of listings is a
/// [`FetchError::Decode`].
pub fn decode_listings(body: &str) -> Result<Vec<Listing>, FetchError> {
    let envelope: ListingsEnvelope =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    match envelope.data {
        Some(listings) => Ok(listings),
        None => {
            tracing::warn!("listing response has no `data` field, treating as empty");
            Ok(Vec::new())
        },
    }
}
