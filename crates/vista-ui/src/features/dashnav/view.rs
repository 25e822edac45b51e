//! Navigation bar view.
//!
//! # Design
//! - Render from [`NavLayout`]; all command handling lives in the controller.
//! - The only local state is the refresh selection.
//! - The embedded time picker is held in a [`WidgetSlot`] released on cleanup.

use crate::components::dash_nav_button::DashNavButton;
use crate::components::refresh_picker::RefreshPicker;
use crate::components::time_picker::mount_time_picker;
use crate::components::tooltip::Tooltip;
use crate::core::dashboard::Dashboard;
use crate::core::refresh::RefreshSelection;
use crate::core::services::NavServices;
use crate::core::store::AppStore;
use crate::core::widget::WidgetSlot;
use crate::features::dashnav::actions::NavAction;
use crate::features::dashnav::controller::{DashNavController, NavContext, NavOutcome};
use crate::features::dashnav::layout::{
    ButtonTarget, LayoutInput, NavButton, NavHeader, NavLayout, in_back_mode,
};
use gloo::events::EventListener;
use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct DashNavProps {
    pub dashboard: Dashboard,
    #[prop_or_default]
    pub editview: Option<AttrValue>,
    #[prop_or_default]
    pub is_fullscreen: bool,
    pub services: NavServices,
    pub intervals: Vec<String>,
    pub settings_view: AttrValue,
    #[prop_or_default]
    pub on_add_panel: Callback<()>,
}

#[function_component(DashNav)]
pub(crate) fn dash_nav(props: &DashNavProps) -> Html {
    let controller = use_memo(
        |(services, settings_view)| DashNavController::new(services.clone(), settings_view.to_string()),
        (props.services.clone(), props.settings_view.clone()),
    );
    let selection = {
        let refresh = props.dashboard.refresh.clone();
        use_state(move || RefreshSelection::from_refresh_field(refresh.as_deref()))
    };
    // Subscribed only to re-render on playlist changes; the value is read
    // through the playlist service.
    let _playlist_changed = use_selector(|store: &AppStore| store.playlist.playing);
    let time_picker_host = use_node_ref();
    let time_picker = use_mut_ref(WidgetSlot::new);

    {
        let selection = selection.clone();
        use_effect_with_deps(
            move |refresh: &Option<String>| {
                let derived = RefreshSelection::from_refresh_field(refresh.as_deref());
                if derived.label() != selection.label() {
                    selection.set(derived);
                }
                || ()
            },
            props.dashboard.refresh.clone(),
        );
    }

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |period| {
                let handle = period.map(|period: std::time::Duration| {
                    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
                    tracing::debug!(millis, "auto-refresh scheduled");
                    Interval::new(millis, move || controller.refresh_now())
                });
                move || drop(handle)
            },
            selection.period(),
        );
    }

    {
        let host = time_picker_host.clone();
        let slot = time_picker.clone();
        use_effect_with_deps(
            move |(_, hidden, range)| {
                if !*hidden {
                    match host.cast::<web_sys::Element>() {
                        Some(element) => slot
                            .borrow_mut()
                            .acquire(mount_time_picker(element, range.clone())),
                        None => tracing::warn!("time picker host missing"),
                    }
                }
                move || slot.borrow_mut().release()
            },
            (
                props.dashboard.uid.clone(),
                props.dashboard.timepicker.hidden,
                props.dashboard.time.clone(),
            ),
        );
    }

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |(editview, is_fullscreen): &(Option<AttrValue>, bool)| {
                let editview = editview.clone();
                let is_fullscreen = *is_fullscreen;
                let listener = in_back_mode(editview.as_deref(), is_fullscreen).then(|| {
                    EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                        if let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                            controller.handle_key(&key.key(), editview.as_deref(), is_fullscreen);
                        }
                    })
                });
                move || drop(listener)
            },
            (props.editview.clone(), props.is_fullscreen),
        );
    }

    let on_action = {
        let controller = controller.clone();
        let dashboard = props.dashboard.clone();
        let editview = props.editview.clone();
        let selection = selection.clone();
        let on_add_panel = props.on_add_panel.clone();
        Callback::from(move |action: NavAction| {
            let ctx = NavContext {
                dashboard: &dashboard,
                editview: editview.as_deref(),
                selection: &selection,
            };
            match controller.dispatch(action, &ctx) {
                NavOutcome::RefreshChanged(next) => selection.set(next),
                NavOutcome::AddPanelRequested => on_add_panel.emit(()),
                NavOutcome::Pending(task) => {
                    let controller = (*controller).clone();
                    yew::platform::spawn_local(async move {
                        let outcome = controller.run(task).await;
                        tracing::debug!(?outcome, "nav task finished");
                    });
                }
                NavOutcome::Done | NavOutcome::RefreshUnchanged => {}
            }
        })
    };

    let layout = NavLayout::compute(&LayoutInput {
        dashboard: &props.dashboard,
        editview: props.editview.as_deref(),
        is_fullscreen: props.is_fullscreen,
        playlist_playing: controller.playlist_playing(),
        selection: &selection,
        intervals: &props.intervals,
    });

    let header = match &layout.header {
        NavHeader::Back => {
            let onclick = on_action.reform(|_: MouseEvent| NavAction::Close);
            html! {
                <div class="navbar-edit">
                    <Tooltip content="Go back (Esc)">
                        <button class="navbar-edit__back-btn" type="button" aria-label="Go back" {onclick}>
                            <i class="fa fa-arrow-left" />
                        </button>
                    </Tooltip>
                </div>
            }
        }
        NavHeader::Title {
            folder_prefix,
            title,
        } => {
            let onclick = on_action.reform(|_: MouseEvent| NavAction::OpenSearch);
            html! {
                <div>
                    <a class="navbar-page-btn" {onclick}>
                        <i class="gicon gicon-dashboard" />
                        if let Some(prefix) = folder_prefix {
                            <span class="navbar-page-btn--folder">{prefix.clone()}</span>
                        }
                        {title.clone()}
                        <i class="fa fa-caret-down" />
                    </a>
                </div>
            }
        }
    };

    let on_interval_changed = on_action.reform(NavAction::ChangeRefresh);
    let on_refresh = on_action.reform(|()| NavAction::RefreshNow);

    html! {
        <div class="navbar">
            {header}
            <div class="navbar__spacer" />
            if !layout.playlist.is_empty() {
                <div class="navbar-buttons navbar-buttons--playlist">
                    { for layout.playlist.iter().map(|button| render_button(button, &on_action)) }
                </div>
            }
            <div class="navbar-buttons navbar-buttons--actions">
                { for layout.actions.iter().map(|button| render_button(button, &on_action)) }
            </div>
            <div class="navbar-buttons navbar-buttons--tv">
                { render_button(&layout.tv, &on_action) }
            </div>
            <div class="navbar-buttons">
                <RefreshPicker
                    options={layout.refresh_options.clone()}
                    value={layout.selected_refresh.clone()}
                    {on_interval_changed}
                    {on_refresh}
                />
                if layout.show_time_picker {
                    <div class="gf-timepicker-nav" ref={time_picker_host} />
                }
            </div>
        </div>
    }
}

fn render_button(button: &NavButton, on_action: &Callback<NavAction>) -> Html {
    match &button.target {
        ButtonTarget::Action(action) => {
            let action = action.clone();
            let onclick = on_action.reform(move |_: MouseEvent| action.clone());
            html! {
                <DashNavButton
                    tooltip={button.tooltip}
                    class_suffix={button.class_suffix}
                    icon={button.icon}
                    {onclick}
                />
            }
        }
        ButtonTarget::Link(url) => html! {
            <DashNavButton
                tooltip={button.tooltip}
                class_suffix={button.class_suffix}
                icon={button.icon}
                href={AttrValue::from(url.clone())}
            />
        },
    }
}
