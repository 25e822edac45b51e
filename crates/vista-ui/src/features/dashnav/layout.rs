//! Render policy for the navigation bar.
//!
//! # Design
//! - A pure function of the dashboard, the view flags, and the local refresh
//!   selection; the Yew view only maps the result to markup.
//! - Every conditional button is gated by exactly one metadata flag.
//! - The star icon is read from the dashboard each time, never cached.

use crate::core::dashboard::Dashboard;
use crate::core::refresh::RefreshSelection;
use crate::features::dashnav::actions::NavAction;

/// What a button does when activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonTarget {
    /// Dispatch a command.
    Action(NavAction),
    /// Navigate to a URL.
    Link(String),
}

/// Icon button descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavButton {
    /// Tooltip text.
    pub tooltip: &'static str,
    /// Suffix for the `btn--{suffix}` / `navbar-button--{suffix}` classes.
    pub class_suffix: &'static str,
    /// Icon class list.
    pub icon: &'static str,
    /// Click behaviour.
    pub target: ButtonTarget,
}

impl NavButton {
    const fn action(
        tooltip: &'static str,
        class_suffix: &'static str,
        icon: &'static str,
        action: NavAction,
    ) -> Self {
        Self {
            tooltip,
            class_suffix,
            icon,
            target: ButtonTarget::Action(action),
        }
    }
}

/// Left-hand header of the bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavHeader {
    /// Back button (edit view or fullscreen).
    Back,
    /// Title doubling as the search trigger.
    Title {
        /// `"{folder} / "` when the dashboard lives in a folder.
        folder_prefix: Option<String>,
        /// Dashboard title.
        title: String,
    },
}

/// Inputs for [`NavLayout::compute`].
#[derive(Clone, Copy, Debug)]
pub struct LayoutInput<'a> {
    /// Dashboard being shown.
    pub dashboard: &'a Dashboard,
    /// Active named edit view, if any.
    pub editview: Option<&'a str>,
    /// Fullscreen panel flag.
    pub is_fullscreen: bool,
    /// Playlist session is running.
    pub playlist_playing: bool,
    /// Current refresh selection.
    pub selection: &'a RefreshSelection,
    /// Picker interval list.
    pub intervals: &'a [String],
}

/// Everything the bar renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLayout {
    /// Back button or title.
    pub header: NavHeader,
    /// Playlist transport (empty unless playing).
    pub playlist: Vec<NavButton>,
    /// Permission-gated action buttons.
    pub actions: Vec<NavButton>,
    /// Kiosk toggle.
    pub tv: NavButton,
    /// Refresh picker options, `Off` first.
    pub refresh_options: Vec<RefreshSelection>,
    /// Selected refresh option.
    pub selected_refresh: RefreshSelection,
    /// Whether the embedded time picker is shown.
    pub show_time_picker: bool,
}

/// Whether the bar is in back-button mode.
#[must_use]
pub fn in_back_mode(editview: Option<&str>, is_fullscreen: bool) -> bool {
    editview.is_some_and(|view| !view.is_empty()) || is_fullscreen
}

impl NavLayout {
    /// Compute the layout.
    #[must_use]
    pub fn compute(input: &LayoutInput<'_>) -> Self {
        let dashboard = input.dashboard;
        let meta = &dashboard.meta;

        let header = if in_back_mode(input.editview, input.is_fullscreen) {
            NavHeader::Back
        } else {
            NavHeader::Title {
                folder_prefix: dashboard.folder_title().map(|folder| format!("{folder} / ")),
                title: dashboard.title.clone(),
            }
        };

        let playlist = if input.playlist_playing {
            vec![
                NavButton::action(
                    "Go to previous dashboard",
                    "tight",
                    "fa fa-step-backward",
                    NavAction::PlaylistPrev,
                ),
                NavButton::action("Stop playlist", "tight", "fa fa-stop", NavAction::PlaylistStop),
                NavButton::action(
                    "Go to next dashboard",
                    "tight",
                    "fa fa-forward",
                    NavAction::PlaylistNext,
                ),
            ]
        } else {
            Vec::new()
        };

        let mut actions = Vec::new();
        if meta.can_save {
            actions.push(NavButton::action(
                "Add panel",
                "add-panel",
                "gicon gicon-add-panel",
                NavAction::AddPanel,
            ));
        }
        if meta.can_star {
            actions.push(NavButton::action(
                "Mark as favorite",
                "star",
                if meta.is_starred {
                    "fa fa-star"
                } else {
                    "fa fa-star-o"
                },
                NavAction::ToggleStar,
            ));
        }
        if meta.can_share {
            actions.push(NavButton::action(
                "Share dashboard",
                "share",
                "fa fa-share-square-o",
                NavAction::OpenShare,
            ));
        }
        if meta.can_save {
            actions.push(NavButton::action(
                "Save dashboard",
                "save",
                "fa fa-save",
                NavAction::Save,
            ));
        }
        if let Some(url) = dashboard.snapshot_url() {
            actions.push(NavButton {
                tooltip: "Open original dashboard",
                class_suffix: "snapshot-origin",
                icon: "fa fa-link",
                target: ButtonTarget::Link(url.to_string()),
            });
        }
        if meta.show_settings {
            actions.push(NavButton::action(
                "Dashboard settings",
                "settings",
                "fa fa-cog",
                NavAction::OpenSettings,
            ));
        }

        Self {
            header,
            playlist,
            actions,
            tv: NavButton::action(
                "Cycle view mode",
                "tv",
                "fa fa-desktop",
                NavAction::ToggleKiosk,
            ),
            refresh_options: RefreshSelection::options(input.intervals, input.selection),
            selected_refresh: input.selection.clone(),
            show_time_picker: !dashboard.timepicker.hidden,
        }
    }

    /// Whether any button dispatches `action`.
    #[must_use]
    pub fn has_action(&self, action: &NavAction) -> bool {
        self.playlist
            .iter()
            .chain(&self.actions)
            .chain(std::iter::once(&self.tv))
            .any(|button| button.target == ButtonTarget::Action(action.clone()))
    }

    /// Button with the given class suffix among the action buttons.
    #[must_use]
    pub fn action_button(&self, class_suffix: &str) -> Option<&NavButton> {
        self.actions
            .iter()
            .find(|button| button.class_suffix == class_suffix)
    }
}
