use pedalswap_shared::LoadState;
use yew::prelude::*;

use crate::{
    components::{
        error_notice::ErrorNotice, listing_card::ListingCard, loading_spinner::LoadingSpinner,
    },
    hooks::use_listings,
    i18n::current::{browse_page as t, loading_spinner as spinner_text},
    models::Listing,
};

#[function_component(BrowsePage)]
pub fn browse_page() -> Html {
    let state = use_listings();

    html! {
        <section class="browse-page">
            <BrowseBody state={state} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct BrowseBodyProps {
    pub state: LoadState<Listing>,
}

/// Renders one snapshot of the browse lifecycle.
#[function_component(BrowseBody)]
pub fn browse_body(props: &BrowseBodyProps) -> Html {
    match &props.state {
        LoadState::Loading => html! {
            <LoadingSpinner label={spinner_text::LOADING_BIKES} />
        },
        LoadState::Failed(message) => html! {
            <ErrorNotice message={message.clone()} />
        },
        LoadState::Loaded(listings) => html! {
            <>
                <h1 class={classes!("text-3xl", "font-bold", "text-gray-900", "mb-8")}>{ t::TITLE }</h1>
                {
                    if listings.is_empty() {
                        html! {
                            <div class={classes!("browse-empty", "text-center", "py-12")}>
                                <div class={classes!("text-gray-600")}>{ t::EMPTY }</div>
                            </div>
                        }
                    } else {
                        html! {
                            <div
                                class={classes!("listing-grid", "grid", "md:grid-cols-2", "lg:grid-cols-3", "gap-6")}
                                aria-label={t::GRID_ARIA}
                            >
                                { for listings.iter().map(|listing| html! {
                                    <ListingCard key={listing.id.to_string()} listing={listing.clone()} />
                                }) }
                            </div>
                        }
                    }
                }
            </>
        },
    }
}

#[cfg(test)]
mod tests {
    use pedalswap_shared::{decode_listings, FetchError, LoadState};
    use yew::ServerRenderer;

    use super::{BrowseBody, BrowseBodyProps};
    use crate::models::Listing;

    async fn render(state: LoadState<Listing>) -> String {
        ServerRenderer::<BrowseBody>::with_props(move || BrowseBodyProps {
            state,
        })
        .render()
        .await
    }

    fn listing(id: u64, title: &str) -> Listing {
        Listing {
            id,
            title: title.to_string(),
            ..Listing::default()
        }
    }

    fn card_ids(html: &str) -> Vec<String> {
        html.split("data-listing-id=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn loading_shows_indicator_and_no_grid() {
        let html = render(LoadState::Loading).await;
        assert!(html.contains("Loading bikes..."));
        assert!(!html.contains("listing-grid"));
        assert!(card_ids(&html).is_empty());
    }

    #[tokio::test]
    async fn renders_one_card_per_listing_in_order() {
        let listings = vec![listing(30, "Gravel"), listing(10, "Road"), listing(20, "Cargo")];
        let html = render(LoadState::Loaded(listings)).await;

        assert!(html.contains("Browse Bikes"));
        assert_eq!(card_ids(&html), ["30", "10", "20"]);
        let gravel = html.find("Gravel").expect("gravel card");
        let road = html.find("Road").expect("road card");
        let cargo = html.find("Cargo").expect("cargo card");
        assert!(gravel < road && road < cargo);
    }

    #[tokio::test]
    async fn empty_collection_shows_empty_message() {
        let html = render(LoadState::Loaded(Vec::new())).await;
        assert!(html.contains("No bikes available for trading."));
        assert!(!html.contains("Error:"));
        assert!(card_ids(&html).is_empty());
    }

    #[tokio::test]
    async fn missing_data_field_shows_empty_message_not_error() {
        let state = LoadState::Loading.settle(decode_listings("{}"));
        let html = render(state).await;
        assert!(html.contains("No bikes available for trading."));
        assert!(!html.contains("Error:"));
    }

    #[tokio::test]
    async fn bad_status_shows_error_and_zero_cards() {
        let state = LoadState::Loading.settle(Err(FetchError::Status(500)));
        let html = render(state).await;
        assert!(html.contains("Error: Failed to fetch bikes"));
        assert!(!html.contains("500"));
        assert!(card_ids(&html).is_empty());
    }

    #[tokio::test]
    async fn network_failure_shows_rejection_text() {
        let rejection = "NetworkError when attempting to fetch resource.";
        let state = LoadState::Loading.settle(Err(FetchError::Transport(rejection.into())));
        let html = render(state).await;
        assert!(html.contains("Error: NetworkError when attempting to fetch resource."));
        assert!(card_ids(&html).is_empty());
    }

    #[tokio::test]
    async fn trail_bike_response_renders_single_card() {
        let body = r#"{"data":[{"id":1,"title":"Trail Bike","brand":"Kona","model":"Process","type":"MTB","year":2019,"size":"M","condition":"Good","price":"450","description":"Great trail bike, lightly used.","images":[]}]}"#;
        let html = render(LoadState::Loading.settle(decode_listings(body))).await;

        assert_eq!(card_ids(&html), ["1"]);
        assert!(html.contains("Trail Bike"));
        assert!(html.contains("2019 Kona Process"));
        assert!(html.contains("MTB"));
        assert!(html.contains("$450"));
        assert!(html.contains("No Image"));
        assert!(!html.contains("<img"));
        assert!(html.contains("Great trail bike, lightly used."));
    }

    #[tokio::test]
    async fn only_cards_without_images_get_placeholder() {
        let with_image = Listing {
            images: vec!["a.jpg".to_string()],
            ..listing(1, "Pictured")
        };
        let html = render(LoadState::Loaded(vec![with_image, listing(2, "Bare")])).await;
        assert_eq!(html.matches("<img").count(), 1);
        assert_eq!(html.matches("No Image").count(), 1);
    }
}
