#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use pedalswap_shared::decode_listings;
use pedalswap_shared::FetchError;
use web_sys::AbortSignal;

#[cfg(not(feature = "mock"))]
use crate::config::API_BASE;
use crate::models::Listing;
#[cfg(feature = "mock")]
use crate::models;

/// 获取全部在售自行车
///
/// `signal` ties the request to its caller: aborting it rejects the pending
/// fetch with a [`FetchError::Transport`].
pub async fn fetch_listings(signal: Option<&AbortSignal>) -> Result<Vec<Listing>, FetchError> {
    #[cfg(feature = "mock")]
    {
        let _ = signal;
        return Ok(models::get_mock_listings());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/bikes", API_BASE);

        let response = Request::get(&url)
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            tracing::error!(status = response.status(), url = %url, "listing request rejected");
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        decode_listings(&body)
    }
}
