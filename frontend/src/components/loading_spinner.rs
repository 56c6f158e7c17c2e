use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    pub label: AttrValue,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div
            class={classes!("loading-spinner", "flex", "flex-col", "items-center", "justify-center", "gap-3", "py-12")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                class={classes!(
                    "w-10",
                    "h-10",
                    "rounded-full",
                    "border-[3px]",
                    "border-gray-200",
                    "border-t-blue-600",
                    "animate-spin"
                )}
            />
            <span class={classes!("text-gray-600")}>{ props.label.clone() }</span>
        </div>
    }
}
