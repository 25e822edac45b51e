//! Dashboard search overlay listing recently viewed dashboards.

use crate::core::search::{RecentDashboard, filter};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchOverlayProps {
    pub recent: Vec<RecentDashboard>,
    pub on_select: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(SearchOverlay)]
pub(crate) fn search_overlay(props: &SearchOverlayProps) -> Html {
    let term = use_state(String::new);
    let oninput = {
        let term = term.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                term.set(input.value());
            }
        })
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let matches = filter(&props.recent, &term);

    html! {
        <div class="search-container">
            <div class="search-field-wrapper">
                <i class="fa fa-search" />
                <input
                    class="input input-bordered w-full"
                    type="text"
                    placeholder="Search dashboards by name"
                    value={(*term).clone()}
                    {oninput}
                />
                <button class="btn btn-ghost" type="button" aria-label="Close search" onclick={on_close}>
                    <i class="fa fa-times" />
                </button>
            </div>
            <ul class="search-results menu">
                if matches.is_empty() {
                    <li class="search-results--empty">{"No dashboards found"}</li>
                }
                { for matches.into_iter().map(|entry| {
                    let uid = entry.uid.clone();
                    let on_select = props.on_select.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(uid.clone()));
                    html! {
                        <li>
                            <a class="search-item" {onclick}>
                                if let Some(folder) = &entry.folder {
                                    <span class="search-item__folder">{format!("{folder} / ")}</span>
                                }
                                <span class="search-item__title">{entry.title.clone()}</span>
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}
