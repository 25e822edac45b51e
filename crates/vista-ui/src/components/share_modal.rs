//! Share dialog opened by the navigation bar.

use crate::core::dashboard::Dashboard;
use crate::core::query::RouteQuery;
use crate::core::share::share_url;
use yew::prelude::*;

const TABS: [&str; 2] = ["Link", "Export"];

#[derive(Properties, PartialEq)]
pub(crate) struct ShareModalProps {
    pub dashboard: Dashboard,
    pub query: RouteQuery,
    #[prop_or_default]
    pub tab_index: usize,
    pub on_close: Callback<()>,
}

#[function_component(ShareModal)]
pub(crate) fn share_modal(props: &ShareModalProps) -> Html {
    let tab = use_state(|| props.tab_index.min(TABS.len() - 1));
    let origin = gloo::utils::window()
        .location()
        .origin()
        .unwrap_or_default();

    let body = if *tab == 0 {
        let url = share_url(&origin, &props.dashboard, &props.query);
        html! {
            <div class="share-modal-link">
                <p class="text-sm">{"Link to this dashboard with the current query."}</p>
                <input class="input input-bordered w-full" type="text" readonly={true} value={url} />
            </div>
        }
    } else {
        let json = serde_json::to_string_pretty(&props.dashboard).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "dashboard export failed");
            String::new()
        });
        html! {
            <pre class="share-modal-export"><code>{json}</code></pre>
        }
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class="modal-box">
                <h3 class="font-semibold">{format!("Share {}", props.dashboard.title)}</h3>
                <div role="tablist" class="tabs tabs-bordered">
                    { for TABS.iter().enumerate().map(|(index, label)| {
                        let tab = tab.clone();
                        let onclick = Callback::from(move |_: MouseEvent| tab.set(index));
                        html! {
                            <button
                                role="tab"
                                type="button"
                                class={classes!("tab", (*tab == index).then_some("tab-active"))}
                                {onclick}
                            >
                                {*label}
                            </button>
                        }
                    }) }
                </div>
                {body}
                <div class="modal-action">
                    <button class="btn" type="button" onclick={on_close.clone()}>{"Close"}</button>
                </div>
            </div>
            <button class="modal-backdrop" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}
