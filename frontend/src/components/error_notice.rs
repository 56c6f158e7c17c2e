use yew::prelude::*;

use crate::i18n::{current::error_notice as t, fill_one};

#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: AttrValue,
}

/// Static, non-dismissable failure message.
#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! {
        <div class={classes!("error-notice", "text-center", "py-12")} role="alert" aria-live="assertive">
            <div class={classes!("text-red-600")}>
                { fill_one(t::MESSAGE_TEMPLATE, &props.message) }
            </div>
        </div>
    }
}
