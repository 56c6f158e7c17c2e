use std::{cell::Cell, rc::Rc};

use pedalswap_shared::{FetchError, LoadState};
use web_sys::AbortController;
use yew::prelude::*;

use crate::{api, models::Listing};

/// Load the listing collection once for the lifetime of the calling
/// component.
///
/// The request is issued on mount and never repeated. Unmounting aborts the
/// request if it is still in flight, and a late response is dropped instead
/// of being written into the disposed component's state.
///
/// # Example
/// ```rust
/// use crate::hooks::use_listings;
///
/// #[function_component(ListingCount)]
/// fn listing_count() -> Html {
///     let listings = use_listings();
///     let count = listings.items().map(<[_]>::len).unwrap_or_default();
///     html! { <span>{ count }</span> }
/// }
/// ```
#[hook]
pub fn use_listings() -> LoadState<Listing> {
    let state = use_state(LoadState::<Listing>::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(AbortController::signal);
            let mounted = Rc::new(Cell::new(true));

            {
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = api::fetch_listings(signal.as_ref()).await;
                    if !mounted.get() {
                        tracing::debug!("browse view unmounted, dropping listing response");
                        return;
                    }
                    state.set(apply_outcome(&state, outcome));
                });
            }

            move || {
                mounted.set(false);
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    (*state).clone()
}

/// Settle `current` with a fetch outcome, logging failures.
///
/// An already settled state is returned unchanged.
fn apply_outcome(
    current: &LoadState<Listing>,
    outcome: Result<Vec<Listing>, FetchError>,
) -> LoadState<Listing> {
    if let Err(e) = &outcome {
        tracing::error!(error = ?e, "failed to fetch listings");
    }
    current.clone().settle(outcome)
}
