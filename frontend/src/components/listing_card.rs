use yew::prelude::*;

use crate::{config::image_url, i18n::current::listing_card as t, models::Listing};

/// Image URL to show for `listing`, or `None` for the "No Image" placeholder.
///
/// Once the card's image has failed to load, the placeholder takes its place.
pub fn cover_src(listing: &Listing, image_failed: bool) -> Option<String> {
    if image_failed {
        return None;
    }
    listing.cover_image().map(image_url)
}

#[derive(Properties, PartialEq, Clone)]
pub struct ListingCardProps {
    pub listing: Listing,
}

#[function_component(ListingCard)]
pub fn listing_card(props: &ListingCardProps) -> Html {
    let listing = &props.listing;
    // Per-card, so one broken image never affects its neighbours.
    let image_failed = use_state(|| false);

    let on_image_error = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| image_failed.set(true))
    };

    let cover = cover_src(listing, *image_failed);

    html! {
        <article
            class={classes!("listing-card", "bg-white", "rounded-lg", "shadow-md", "overflow-hidden")}
            data-listing-id={listing.id.to_string()}
        >
            <div class={classes!("h-48", "bg-gray-200", "flex", "items-center", "justify-center")}>
                {
                    if let Some(src) = cover {
                        html! {
                            <img
                                src={src}
                                alt={listing.title.clone()}
                                class={classes!("h-full", "w-full", "object-cover")}
                                loading="lazy"
                                onerror={on_image_error}
                            />
                        }
                    } else {
                        html! {
                            <div class={classes!("listing-no-image", "text-gray-400", "text-sm")}>
                                { t::NO_IMAGE }
                            </div>
                        }
                    }
                }
            </div>

            <div class="p-6">
                <h3 class={classes!("listing-title", "text-xl", "font-semibold", "mb-2")}>
                    { &listing.title }
                </h3>
                <div class={classes!("listing-subtitle", "text-gray-600", "mb-2")}>
                    { listing.subtitle() }
                </div>
                <div class={classes!("flex", "justify-between", "items-center", "mb-3")}>
                    <span class={classes!(
                        "listing-kind",
                        "bg-blue-100",
                        "text-blue-800",
                        "text-xs",
                        "px-2",
                        "py-1",
                        "rounded"
                    )}>
                        { &listing.kind }
                    </span>
                    <span class={classes!("listing-price", "text-lg", "font-bold", "text-green-600")}>
                        { listing.price_label() }
                    </span>
                </div>
                <div class={classes!("text-sm", "text-gray-600", "mb-3")}>
                    { listing.spec_line() }
                </div>
                <p class={classes!("text-gray-700", "text-sm", "line-clamp-3")}>
                    { &listing.description }
                </p>
                <button
                    type="button"
                    class={classes!(
                        "mt-4",
                        "w-full",
                        "bg-blue-600",
                        "text-white",
                        "py-2",
                        "px-4",
                        "rounded",
                        "hover:bg-blue-700",
                        "transition-colors"
                    )}
                >
                    { t::VIEW_DETAILS }
                </button>
            </div>
        </article>
    }
}
