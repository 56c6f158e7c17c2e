//! PedalSwap: browser frontend for trading bikes across the Pacific
//! Northwest.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
mod models;
mod mount;
mod pages;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let mounted = mount::attach(mount::find_anchor(config::MOUNT_ID), |anchor| {
        yew::Renderer::<App>::with_root(anchor).render();
    });
    if mounted {
        tracing::info!(anchor = config::MOUNT_ID, "PedalSwap frontend mounted");
    }
}
