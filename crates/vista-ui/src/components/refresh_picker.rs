//! Refresh button plus interval selector.

use crate::components::tooltip::Tooltip;
use crate::core::refresh::RefreshSelection;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RefreshPickerProps {
    pub options: Vec<RefreshSelection>,
    pub value: RefreshSelection,
    pub on_interval_changed: Callback<RefreshSelection>,
    pub on_refresh: Callback<()>,
}

#[function_component(RefreshPicker)]
pub(crate) fn refresh_picker(props: &RefreshPickerProps) -> Html {
    let onchange = {
        let options = props.options.clone();
        let on_interval_changed = props.on_interval_changed.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let label = target.value();
                match RefreshSelection::find(&options, &label) {
                    Some(selection) => on_interval_changed.emit(selection.clone()),
                    None => tracing::warn!(label = %label, "refresh option not found"),
                }
            }
        })
    };
    let onclick = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };
    let active = !props.value.is_off();

    html! {
        <div class={classes!("refresh-picker", active.then_some("refresh-picker--active"))}>
            <div class="refresh-picker-buttons">
                <Tooltip content="Refresh dashboard">
                    <button
                        class="btn btn--refresh"
                        type="button"
                        aria-label="Refresh dashboard"
                        {onclick}
                    >
                        <i class="fa fa-refresh" />
                    </button>
                </Tooltip>
                <select class="refresh-picker-select" aria-label="Refresh interval" {onchange}>
                    { for props.options.iter().map(|option| {
                        let label = option.label().to_string();
                        html! {
                            <option value={label.clone()} selected={option.label() == props.value.label()}>
                                {label}
                            </option>
                        }
                    }) }
                </select>
            </div>
        </div>
    }
}
