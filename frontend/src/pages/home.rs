use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::home_page as t, router::Route};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let card_class = classes!("bg-white", "p-8", "rounded-lg", "shadow-md");
    let cta_class = |color: &'static str, hover: &'static str| {
        classes!(
            "inline-block",
            color,
            "text-white",
            "px-6",
            "py-3",
            "rounded-lg",
            hover,
            "transition-colors"
        )
    };

    html! {
        <section class={classes!("home-page", "text-center")}>
            <div class={classes!("max-w-4xl", "mx-auto")}>
                <h1 class={classes!("text-5xl", "font-bold", "text-gray-900", "mb-6")}>
                    { t::TITLE }
                </h1>
                <p class={classes!("text-xl", "text-gray-600", "mb-8")}>{ t::TAGLINE }</p>

                <div class={classes!("grid", "md:grid-cols-2", "gap-8", "mt-12")}>
                    <div class={card_class.clone()}>
                        <h3 class={classes!("text-2xl", "font-semibold", "mb-4")}>{ t::BROWSE_TITLE }</h3>
                        <p class={classes!("text-gray-600", "mb-6")}>{ t::BROWSE_DESC }</p>
                        <Link<Route>
                            to={Route::Browse}
                            classes={cta_class("bg-blue-600", "hover:bg-blue-700")}
                        >
                            { t::BROWSE_CTA }
                        </Link<Route>>
                    </div>

                    <div class={card_class}>
                        <h3 class={classes!("text-2xl", "font-semibold", "mb-4")}>{ t::LIST_TITLE }</h3>
                        <p class={classes!("text-gray-600", "mb-6")}>{ t::LIST_DESC }</p>
                        <Link<Route>
                            to={Route::ListBike}
                            classes={cta_class("bg-green-600", "hover:bg-green-700")}
                        >
                            { t::LIST_CTA }
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </section>
    }
}
