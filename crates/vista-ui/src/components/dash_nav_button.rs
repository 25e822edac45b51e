use crate::components::tooltip::Tooltip;
use yew::prelude::*;

/// Props for navigation bar icon buttons.
#[derive(Properties, PartialEq)]
pub(crate) struct DashNavButtonProps {
    /// Hover hint.
    pub tooltip: AttrValue,
    /// Suffix for the `navbar-button--{suffix}` class.
    pub class_suffix: AttrValue,
    /// Icon class list.
    pub icon: AttrValue,
    /// Click handler (ignored when `href` is set).
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Render as a link instead of a button.
    #[prop_or_default]
    pub href: Option<AttrValue>,
}

#[function_component(DashNavButton)]
pub(crate) fn dash_nav_button(props: &DashNavButtonProps) -> Html {
    let class = classes!(
        "btn",
        "navbar-button",
        format!("navbar-button--{}", props.class_suffix)
    );
    let body = match &props.href {
        Some(href) => html! {
            <a class={class} href={href.clone()} aria-label={props.tooltip.clone()}>
                <i class={props.icon.clone()} />
            </a>
        },
        None => html! {
            <button
                class={class}
                type="button"
                aria-label={props.tooltip.clone()}
                onclick={props.onclick.clone()}
            >
                <i class={props.icon.clone()} />
            </button>
        },
    };
    html! { <Tooltip content={props.tooltip.clone()}>{body}</Tooltip> }
}
