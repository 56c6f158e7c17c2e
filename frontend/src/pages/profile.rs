use yew::prelude::*;

use crate::i18n::current::profile_page as t;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let panel_class = classes!("bg-white", "shadow-md", "rounded-lg", "p-6");
    let panel_title_class = classes!("text-xl", "font-semibold", "mb-4");

    html! {
        <section class={classes!("profile-page", "max-w-4xl", "mx-auto")}>
            <h1 class={classes!("text-3xl", "font-bold", "text-gray-900", "mb-8")}>{ t::TITLE }</h1>

            <div class={classes!(panel_class.clone(), "mb-8")}>
                <h2 class={panel_title_class.clone()}>{ t::USER_INFO }</h2>
                <dl class={classes!("grid", "md:grid-cols-2", "gap-4")}>
                    { for t::FIELDS.iter().map(|(label, value)| html! {
                        <div>
                            <dt class={classes!("block", "text-sm", "font-medium", "text-gray-500")}>{ *label }</dt>
                            <dd class={classes!("text-gray-900")}>{ *value }</dd>
                        </div>
                    }) }
                </dl>
            </div>

            <div class={classes!("grid", "md:grid-cols-2", "gap-8")}>
                <div class={panel_class.clone()}>
                    <h2 class={panel_title_class.clone()}>{ t::MY_BIKES }</h2>
                    <p class={classes!("text-gray-600")}>{ t::MY_BIKES_EMPTY }</p>
                    <button
                        type="button"
                        class={classes!("mt-4", "bg-green-600", "text-white", "px-4", "py-2", "rounded", "hover:bg-green-700", "transition-colors")}
                    >
                        { t::BTN_LIST }
                    </button>
                </div>

                <div class={panel_class}>
                    <h2 class={panel_title_class}>{ t::TRADE_HISTORY }</h2>
                    <p class={classes!("text-gray-600")}>{ t::TRADE_HISTORY_EMPTY }</p>
                    <button
                        type="button"
                        class={classes!("mt-4", "bg-blue-600", "text-white", "px-4", "py-2", "rounded", "hover:bg-blue-700", "transition-colors")}
                    >
                        { t::BTN_BROWSE }
                    </button>
                </div>
            </div>
        </section>
    }
}
