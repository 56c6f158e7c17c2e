use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    i18n::current::{common as common_text, navigation as t},
    router::Route,
};

const NAV_ITEMS: &[(Route, &str)] = &[
    (Route::Home, t::NAV_HOME),
    (Route::Browse, t::NAV_BROWSE),
    (Route::ListBike, t::NAV_LIST),
    (Route::Profile, t::NAV_PROFILE),
];

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let route = use_route::<Route>();

    let nav_link = |target: &Route, label: &str| {
        let active = route.as_ref() == Some(target);
        let link_classes = classes!(
            "nav-link",
            "px-3",
            "py-2",
            "rounded-md",
            "text-sm",
            "font-medium",
            "transition-colors",
            if active {
                classes!("nav-link-active", "bg-blue-600", "text-white")
            } else {
                classes!("text-gray-700", "hover:bg-gray-100")
            }
        );

        html! {
            <li>
                <Link<Route> to={target.clone()} classes={link_classes}>
                    { label }
                </Link<Route>>
            </li>
        }
    };

    html! {
        <nav class={classes!("site-nav", "bg-white", "shadow-sm")} aria-label={t::NAV_MAIN_ARIA}>
            <div class={classes!("container", "mx-auto", "px-4", "flex", "items-center", "justify-between", "h-16")}>
                <Link<Route>
                    to={Route::Home}
                    classes={classes!("text-xl", "font-bold", "text-blue-700")}
                >
                    { common_text::BRAND_NAME }
                </Link<Route>>
                <ul class={classes!("flex", "items-center", "gap-2")}>
                    { for NAV_ITEMS.iter().map(|(target, label)| nav_link(target, *label)) }
                </ul>
            </div>
        </nav>
    }
}
