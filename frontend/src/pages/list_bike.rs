use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::list_bike_page as t, router::Route};

#[function_component(ListBikePage)]
pub fn list_bike_page() -> Html {
    html! {
        <section class={classes!(
            "list-bike-page", "max-w-2xl", "mx-auto", "text-center",
            "flex", "flex-col", "items-center", "gap-6", "py-12"
        )}>
            <h1 class={classes!("text-3xl", "font-bold", "text-gray-900")}>{ t::TITLE }</h1>
            <p class={classes!(
                "inline-flex", "items-center", "gap-2", "px-4", "py-2",
                "rounded-full", "bg-amber-100", "text-amber-800", "text-sm", "font-semibold"
            )}>
                { "🚧 " }{ t::STATUS }
            </p>
            <p class={classes!("text-gray-600")}>{ t::DESC }</p>
            <div class={classes!("flex", "flex-wrap", "justify-center", "gap-3")}>
                <Link<Route>
                    to={Route::Browse}
                    classes={classes!("bg-blue-600", "text-white", "px-6", "py-2.5", "rounded-lg", "hover:bg-blue-700")}
                >
                    { t::BTN_BROWSE }
                </Link<Route>>
                <Link<Route>
                    to={Route::Home}
                    classes={classes!("border", "border-gray-300", "text-gray-700", "px-6", "py-2.5", "rounded-lg", "hover:bg-gray-100")}
                >
                    { t::BTN_HOME }
                </Link<Route>>
            </div>
        </section>
    }
}
