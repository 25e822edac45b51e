use crate::app::api::AppCtx;
use crate::app::preferences::{HOME_DASHBOARD_UID, load_config};
use crate::app::wiring::{RouterLocation, StoreDashboardSink, StorePlaylist, StoreTimeService};
use crate::components::search::SearchOverlay;
use crate::components::share_modal::ShareModal;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::dashboard::demo_dashboard;
use crate::core::playlist::{PlaylistItem, PlaylistState};
use crate::core::query::RouteQuery;
use crate::core::services::{EventSink, NavServices, PlaylistControl};
use crate::core::store::{
    AppStore, apply_event, dismiss_toast, push_toast, replace_query, set_dashboard,
};
use crate::core::time_range::describe;
use crate::core::ui::ToastKind;
use crate::features::dashnav::DashNav;
use crate::services::api::ApiDashboardService;
use gloo_timers::callback::Interval;
pub(crate) use routes::Route;
use std::cell::Cell;
use std::rc::Rc;
use vista_events::{AppEvent, ModalRequest};
use vista_telemetry::{LoggingConfig, init_logging};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod preferences;
mod routes;
mod wiring;

/// Delay between playlist steps, in milliseconds.
const PLAYLIST_STEP_MS: u32 = 60_000;

#[derive(Properties, PartialEq)]
pub(crate) struct VistaAppProps {
    pub ctx: AppCtx,
}

#[function_component(VistaApp)]
pub(crate) fn vista_app(props: &VistaAppProps) -> Html {
    html! {
        <ContextProvider<AppCtx> context={props.ctx.clone()}>
            <BrowserRouter>
                <AppRoot />
            </BrowserRouter>
        </ContextProvider<AppCtx>>
    }
}

#[function_component(AppRoot)]
fn app_root() -> Html {
    let Some(ctx) = use_context::<AppCtx>() else {
        return html! { <p class="text-error">{"Missing app context."}</p> };
    };
    let Some(navigator) = use_navigator() else {
        return html! { <p class="text-error">{"Missing router."}</p> };
    };
    let dispatch = Dispatch::<AppStore>::new();
    let location = use_location();
    let chrome = use_selector(|store: &AppStore| store.chrome.clone());
    let dashboard = use_selector(|store: &AppStore| store.dashboard.clone());
    let query = use_selector(|store: &AppStore| store.query.clone());
    let recent = use_selector(|store: &AppStore| store.recent.clone());
    let playing = use_selector(|store: &AppStore| store.playlist.playing);

    let services = {
        let ctx = ctx.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        use_memo(
            move |_| {
                let playlist = Rc::new(StorePlaylist {
                    dispatch: dispatch.clone(),
                    navigator: navigator.clone(),
                });
                NavServices {
                    persistence: Rc::new(ApiDashboardService::new(
                        ctx.client.clone(),
                        dispatch.clone(),
                        ctx.bus.clone(),
                    )),
                    playlist,
                    time: Rc::new(StoreTimeService {
                        dispatch: dispatch.clone(),
                    }),
                    events: Rc::new(ctx.bus.clone()),
                    location: Rc::new(RouterLocation {
                        dispatch: dispatch.clone(),
                        navigator: navigator.clone(),
                    }),
                    dashboards: Rc::new(StoreDashboardSink { dispatch }),
                }
            },
            (),
        )
    };

    {
        let dispatch = dispatch.clone();
        let query_str = location
            .as_ref()
            .map(|location| location.query_str().to_string())
            .unwrap_or_default();
        use_effect_with_deps(
            move |raw: &String| {
                match RouteQuery::parse(raw) {
                    Ok(query) => dispatch.reduce_mut(|store| replace_query(store, query)),
                    Err(err) => tracing::warn!(error = %err, "ignoring undecodable query"),
                }
                || ()
            },
            query_str,
        );
    }

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |bus: &vista_events::EventBus| {
                let alive = Rc::new(Cell::new(true));
                let mut subscription = bus.subscribe(bus.last_event_id());
                {
                    let alive = alive.clone();
                    yew::platform::spawn_local(async move {
                        while let Some(envelope) = subscription.next().await {
                            if !alive.get() {
                                break;
                            }
                            tracing::debug!(
                                event_id = envelope.id,
                                kind = vista_events::event_kind(&envelope.event),
                                "applying ui event"
                            );
                            dispatch.reduce_mut(|store| apply_event(store, &envelope.event));
                        }
                    });
                }
                move || alive.set(false)
            },
            ctx.bus.clone(),
        );
    }

    {
        let playlist = services.playlist.clone();
        use_effect_with_deps(
            move |playing: &bool| {
                let handle =
                    playing.then(|| Interval::new(PLAYLIST_STEP_MS, move || playlist.next()));
                move || drop(handle)
            },
            *playing,
        );
    }

    let on_dismiss_toast = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| dispatch.reduce_mut(|store| dismiss_toast(store, id)))
    };
    let close_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce_mut(|store| store.chrome.search_open = false))
    };
    let on_select_dashboard = {
        let navigator = navigator.clone();
        let close_search = close_search.clone();
        Callback::from(move |uid: String| {
            close_search.emit(());
            navigator.push(&Route::dashboard(uid));
        })
    };
    let hide_modal = {
        let bus = ctx.bus.clone();
        Callback::from(move |()| bus.emit(AppEvent::HideModal))
    };

    let share_modal = match (&chrome.modal, &*dashboard) {
        (
            Some(ModalRequest::ShareDashboard {
                dashboard_uid,
                tab_index,
            }),
            Some(current),
        ) if &current.uid == dashboard_uid => html! {
            <ShareModal
                dashboard={current.clone()}
                query={(*query).clone()}
                tab_index={*tab_index}
                on_close={hide_modal}
            />
        },
        _ => Html::default(),
    };

    let overlays = html! {
        <>
            if chrome.search_open {
                <SearchOverlay
                    recent={(*recent).clone()}
                    on_select={on_select_dashboard}
                    on_close={close_search}
                />
            }
            {share_modal}
            <ToastHost toasts={chrome.toasts.clone()} on_dismiss={on_dismiss_toast} />
        </>
    };

    let navbar = match &*dashboard {
        Some(current) => {
            let intervals = ctx
                .config
                .effective_intervals(Some(current.timepicker.refresh_intervals.as_slice()));
            let on_add_panel = {
                let dispatch = dispatch.clone();
                Callback::from(move |()| {
                    dispatch.reduce_mut(|store| {
                        push_toast(
                            store,
                            "Adding panels is not supported in this view",
                            ToastKind::Info,
                        );
                    });
                })
            };
            html! {
                <DashNav
                    key={current.uid.clone()}
                    dashboard={current.clone()}
                    editview={query.editview().map(|view| AttrValue::from(view.to_string()))}
                    is_fullscreen={query.is_fullscreen()}
                    services={(*services).clone()}
                    {intervals}
                    settings_view={AttrValue::from(ctx.config.settings_view.clone())}
                    {on_add_panel}
                />
            }
        }
        None => Html::default(),
    };

    html! {
        <AppShell kiosk={chrome.kiosk} {navbar} {overlays}>
            <Switch<Route> render={switch} />
        </AppShell>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <DashboardPage uid={HOME_DASHBOARD_UID} /> },
        Route::Dashboard { uid } | Route::DashboardSlug { uid, .. } => {
            html! { <DashboardPage {uid} /> }
        }
        Route::Playlist { uids } => html! { <PlaylistStart {uids} /> },
        Route::NotFound => html! { <p class="not-found">{"Page not found."}</p> },
    }
}

#[derive(Properties, PartialEq)]
struct DashboardPageProps {
    uid: AttrValue,
}

#[function_component(DashboardPage)]
fn dashboard_page(props: &DashboardPageProps) -> Html {
    let ctx = use_context::<AppCtx>();
    let dashboard = use_selector(|store: &AppStore| store.dashboard.clone());
    let generation = use_selector(|store: &AppStore| store.refresh_generation);

    {
        let ctx = ctx.clone();
        use_effect_with_deps(
            move |uid: &AttrValue| {
                let uid = uid.to_string();
                if let Some(ctx) = ctx {
                    let dispatch = Dispatch::<AppStore>::new();
                    yew::platform::spawn_local(async move {
                        match ctx.client.fetch_dashboard(&uid).await {
                            Ok(loaded) => {
                                tracing::info!(uid = %loaded.uid, "dashboard loaded");
                                dispatch.reduce_mut(|store| set_dashboard(store, loaded));
                            }
                            Err(err) => {
                                tracing::warn!(uid = %uid, error = %err, "dashboard fetch failed; using demo");
                                dispatch.reduce_mut(|store| {
                                    set_dashboard(store, demo_dashboard(&uid));
                                    push_toast(
                                        store,
                                        "Backend unavailable, showing a demo dashboard",
                                        ToastKind::Info,
                                    );
                                });
                            }
                        }
                    });
                }
                || ()
            },
            props.uid.clone(),
        );
    }

    match &*dashboard {
        Some(current) if current.uid == props.uid.as_str() => html! {
            <section class="dashboard-body">
                <h2 class="dashboard-body__title">{current.title.clone()}</h2>
                <p class="dashboard-body__range">{describe(&current.time)}</p>
                <p class="dashboard-body__refresh">
                    {format!("Panels refreshed {} times", *generation)}
                </p>
            </section>
        },
        _ => html! { <p class="dashboard-loading">{"Loading dashboard..."}</p> },
    }
}

#[derive(Properties, PartialEq)]
struct PlaylistStartProps {
    uids: AttrValue,
}

/// Starts a playlist over the comma-separated uids and opens the first one.
#[function_component(PlaylistStart)]
fn playlist_start(props: &PlaylistStartProps) -> Html {
    let navigator = use_navigator();
    use_effect_with_deps(
        move |uids: &AttrValue| {
            let items: Vec<PlaylistItem> = uids
                .split(',')
                .map(str::trim)
                .filter(|uid| !uid.is_empty())
                .map(|uid| PlaylistItem {
                    uid: uid.to_string(),
                    title: uid.to_string(),
                })
                .collect();
            let state = PlaylistState::start(items);
            let first = state.current().map(|item| item.uid.clone());
            tracing::info!(items = state.items.len(), "playlist started");
            Dispatch::<AppStore>::new().reduce_mut(|store| store.playlist = state);
            if let (Some(navigator), Some(uid)) = (navigator, first) {
                navigator.replace(&Route::dashboard(uid));
            }
            || ()
        },
        props.uids.clone(),
    );
    html! { <p class="playlist-loading">{"Starting playlist..."}</p> }
}

/// Boot the Vista UI into `#root` (or `<body>`).
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = load_config();
    let logging = LoggingConfig {
        level: &config.log_level,
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(&logging) {
        gloo::console::warn!(format!("logging disabled: {err}"));
    }
    tracing::info!(intervals = config.refresh_intervals.len(), "vista ui starting");

    let props = VistaAppProps {
        ctx: AppCtx::new(config),
    };
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<VistaApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<VistaApp>::with_props(props).render();
    }
}
