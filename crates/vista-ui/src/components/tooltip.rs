use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TooltipProps {
    pub content: AttrValue,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Hover hint wrapper; the text is rendered by CSS from `data-tip`.
#[function_component(Tooltip)]
pub(crate) fn tooltip(props: &TooltipProps) -> Html {
    html! {
        <div
            class={classes!("tooltip", "tooltip-bottom", props.class.clone())}
            data-tip={props.content.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}
