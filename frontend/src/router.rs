use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::navigation::Navigation, pages};

/// Client-side routes. Paths outside this table match nothing and leave the
/// outlet empty.
#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/browse")]
    Browse,

    #[at("/list")]
    ListBike,

    #[at("/profile")]
    Profile,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Browse => html! { <pages::browse::BrowsePage /> },
        Route::ListBike => html! { <pages::list_bike::ListBikePage /> },
        Route::Profile => html! { <pages::profile::ProfilePage /> },
    }
}

/// Navigation bar plus route outlet. Expects a router above it.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    html! {
        <div class={classes!("min-h-screen", "bg-gray-50")}>
            <Navigation />
            <main class={classes!("container", "mx-auto", "px-4", "py-8")}>
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}
